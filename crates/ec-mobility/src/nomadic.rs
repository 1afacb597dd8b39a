//! Nomadic mobility: devices jump between places instead of moving along
//! trajectories.
//!
//! A device sits at a place for an exponentially distributed dwell time and
//! then relocates to a different place chosen uniformly at random.  Each
//! relocation arms the device's next one, so every device always has exactly
//! one pending event.

use std::sync::Arc;

use ec_catalog::PlaceCatalog;
use ec_core::{DeviceId, PlaceId, SimRng};
use tracing::{debug, trace};

use crate::model::{check_device_count, device_count_in, location_in, place_at};
use crate::{
    ConfigError, DwellTimeSampler, Location, MobilityError, MobilityModel, MobilityResult,
    MobilityState, MoveScheduler, Relocation,
};

/// Child-stream offset of the place chooser.
const PLACE_STREAM: u64 = 0;

/// The nomadic mobility engine.
///
/// Randomness comes from two kinds of streams derived from one seed: a place
/// chooser (initial placement and relocation targets) and one dwell stream
/// per attractiveness class.  The same seed, device count and catalog give
/// the same sequence of relocations.
pub struct NomadicMobility {
    catalog:     Arc<PlaceCatalog>,
    sampler:     DwellTimeSampler,
    chooser:     SimRng,
    state:       MobilityState,
    initialized: bool,
}

impl NomadicMobility {
    /// Validate the configuration and build an engine with no device placed.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TooFewPlaces`] if the catalog has fewer than two places:
    /// a relocation must land on a place other than the current one.
    pub fn new(catalog: Arc<PlaceCatalog>, device_count: usize, seed: u64) -> MobilityResult<Self> {
        check_device_count(device_count)?;
        let place_count = catalog.place_count();
        if place_count < 2 {
            return Err(ConfigError::TooFewPlaces(place_count).into());
        }

        let root = SimRng::new(seed);
        let sampler = DwellTimeSampler::from_catalog(&catalog, &root)?;
        Ok(Self {
            chooser: root.child(PLACE_STREAM),
            state: MobilityState::new(device_count, place_count),
            sampler,
            catalog,
            initialized: false,
        })
    }

    /// Uniform place index different from `current`.
    ///
    /// Rejection sampling over the whole catalog.  With `n >= 2` places each
    /// draw succeeds with probability `(n-1)/n`, so this terminates.
    fn choose_other_place(&mut self, current: usize) -> usize {
        let n = self.catalog.place_count();
        loop {
            let candidate = self.chooser.index(n);
            if candidate != current {
                return candidate;
            }
        }
    }
}

impl MobilityModel for NomadicMobility {
    fn initialize(&mut self, scheduler: &mut dyn MoveScheduler) -> MobilityResult<()> {
        if self.initialized {
            return Err(MobilityError::AlreadyInitialized);
        }

        let now = scheduler.now();
        let place_count = self.catalog.place_count();
        for d in 0..self.state.device_count() {
            let device = DeviceId(d as u32);
            let place = self.chooser.index(place_count);
            self.state.place(device, place)?;

            let class = place_at(&self.catalog, place)?.class;
            let dwell = self.sampler.sample(class)?;
            scheduler.schedule_at(device, now + dwell);
        }
        self.initialized = true;

        debug!(
            devices = self.state.device_count(),
            places = place_count,
            classes = self.sampler.class_count(),
            %now,
            "nomadic mobility initialized"
        );
        Ok(())
    }

    fn move_device(
        &mut self,
        device:    DeviceId,
        scheduler: &mut dyn MoveScheduler,
    ) -> MobilityResult<Relocation> {
        if !self.initialized {
            return Err(MobilityError::NotInitialized);
        }
        if device.index() >= self.state.device_count() {
            return Err(MobilityError::UnknownDevice(device));
        }
        let from = self.state.place_index(device).ok_or_else(|| {
            MobilityError::InvariantViolation(format!("{device} has no current place"))
        })?;
        let from_place = *place_at(&self.catalog, from)?;

        // The next dwell is keyed by the place being left and drawn before the
        // destination is known.
        let dwell = self.sampler.sample(from_place.class)?;

        let to = self.choose_other_place(from);
        self.state.relocate(device, to)?;
        let to_id: PlaceId = place_at(&self.catalog, to)?.id;

        let at = scheduler.now();
        let next_move_at = at + dwell;
        scheduler.schedule_at(device, next_move_at);

        trace!(%device, from = %from_place.id, to = %to_id, dwell, %next_move_at, "relocated");
        Ok(Relocation {
            device,
            at,
            from: from_place.id,
            to: to_id,
            dwell,
            next_move_at,
        })
    }

    fn location(&self, device: DeviceId) -> Option<Location> {
        location_in(&self.catalog, &self.state, device)
    }

    fn device_count(&self, place: PlaceId) -> Option<u32> {
        device_count_in(&self.catalog, &self.state, place)
    }

    fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    fn state(&self) -> &MobilityState {
        &self.state
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
