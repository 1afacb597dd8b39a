//! The `MobilityModel` trait and configuration-driven model selection.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ec_catalog::{Place, PlaceCatalog};
use ec_core::{DeviceId, PlaceId, SimTime};

use crate::{
    ConfigError, Location, MobilityError, MobilityResult, MobilityState, MoveScheduler,
    NomadicMobility, StationaryMobility,
};

/// One completed relocation, as returned by [`MobilityModel::move_device`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relocation {
    pub device:       DeviceId,
    /// Clock reading when the move happened.
    pub at:           SimTime,
    pub from:         PlaceId,
    pub to:           PlaceId,
    /// Dwell time drawn for the next move.
    pub dwell:        f64,
    /// When the next move for this device is due (`at + dwell`).
    pub next_move_at: SimTime,
}

/// A device mobility model.
///
/// Implementations own their per-device state and the catalog reference.
/// The event kernel drives them through two calls:
///
/// 1. [`initialize`][Self::initialize] once, which places every device and
///    may arm relocation events via the scheduler;
/// 2. [`move_device`][Self::move_device] each time an armed event falls due.
///
/// The read accessors are O(1) and valid once `initialize` has returned.
pub trait MobilityModel: Send {
    /// Place every device and arm its first relocation, if the model moves
    /// devices at all.
    fn initialize(&mut self, scheduler: &mut dyn MoveScheduler) -> MobilityResult<()>;

    /// Handle a due relocation event for `device`.
    fn move_device(
        &mut self,
        device:    DeviceId,
        scheduler: &mut dyn MoveScheduler,
    ) -> MobilityResult<Relocation>;

    /// Where `device` currently is.  `None` for unknown or unplaced devices.
    fn location(&self, device: DeviceId) -> Option<Location>;

    /// Devices currently at `place`.  `None` if `place` is not in the catalog.
    fn device_count(&self, place: PlaceId) -> Option<u32>;

    fn catalog(&self) -> &PlaceCatalog;

    fn state(&self) -> &MobilityState;

    fn is_initialized(&self) -> bool;

    /// Recompute and check the occupancy invariant.
    fn verify(&self) -> MobilityResult<()> {
        self.state().verify()
    }
}

impl<M: MobilityModel + ?Sized> MobilityModel for Box<M> {
    fn initialize(&mut self, scheduler: &mut dyn MoveScheduler) -> MobilityResult<()> {
        (**self).initialize(scheduler)
    }

    fn move_device(
        &mut self,
        device:    DeviceId,
        scheduler: &mut dyn MoveScheduler,
    ) -> MobilityResult<Relocation> {
        (**self).move_device(device, scheduler)
    }

    fn location(&self, device: DeviceId) -> Option<Location> {
        (**self).location(device)
    }

    fn device_count(&self, place: PlaceId) -> Option<u32> {
        (**self).device_count(place)
    }

    fn catalog(&self) -> &PlaceCatalog {
        (**self).catalog()
    }

    fn state(&self) -> &MobilityState {
        (**self).state()
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn verify(&self) -> MobilityResult<()> {
        (**self).verify()
    }
}

/// Device ids are `u32`; reject populations that cannot be numbered.
pub(crate) fn check_device_count(device_count: usize) -> Result<(), ConfigError> {
    if device_count == 0 {
        return Err(ConfigError::NoDevices);
    }
    if u32::try_from(device_count).is_err() {
        return Err(ConfigError::TooManyDevices(device_count));
    }
    Ok(())
}

/// Place index → `Place`, treating a miss as corrupted state.
pub(crate) fn place_at(catalog: &PlaceCatalog, index: usize) -> MobilityResult<&Place> {
    catalog.place_at(index).ok_or_else(|| {
        MobilityError::InvariantViolation(format!(
            "place index {index} is not in the catalog ({} places)",
            catalog.place_count()
        ))
    })
}

/// Location lookup shared by the catalog-backed models.
pub(crate) fn location_in(
    catalog: &PlaceCatalog,
    state:   &MobilityState,
    device:  DeviceId,
) -> Option<Location> {
    let place = catalog.place_at(state.place_index(device)?)?;
    Some(Location { place: place.id, class: place.class })
}

pub(crate) fn device_count_in(
    catalog: &PlaceCatalog,
    state:   &MobilityState,
    place:   PlaceId,
) -> Option<u32> {
    state.occupancy(catalog.index_of(place)?)
}

// ── MobilityKind ──────────────────────────────────────────────────────────────

/// Which mobility model a run uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MobilityKind {
    /// Devices hop between places after exponential dwell times.
    #[default]
    Nomadic,
    /// Devices stay where they were first placed.
    Stationary,
}

impl MobilityKind {
    /// Construct the selected model over `catalog`.
    pub fn build(
        self,
        catalog:      Arc<PlaceCatalog>,
        device_count: usize,
        seed:         u64,
    ) -> MobilityResult<Box<dyn MobilityModel>> {
        Ok(match self {
            MobilityKind::Nomadic => Box::new(NomadicMobility::new(catalog, device_count, seed)?),
            MobilityKind::Stationary => {
                Box::new(StationaryMobility::new(catalog, device_count, seed)?)
            }
        })
    }
}

impl fmt::Display for MobilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MobilityKind::Nomadic => "nomadic",
            MobilityKind::Stationary => "stationary",
        };
        f.write_str(s)
    }
}

impl FromStr for MobilityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nomadic" => Ok(MobilityKind::Nomadic),
            "stationary" => Ok(MobilityKind::Stationary),
            other => Err(format!(
                "unknown mobility model {other:?}: expected \"nomadic\" or \"stationary\""
            )),
        }
    }
}
