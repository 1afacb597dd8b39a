//! A mobility model in which devices never move.

use std::sync::Arc;

use ec_catalog::PlaceCatalog;
use ec_core::{DeviceId, PlaceId, SimRng};
use tracing::debug;

use crate::model::{check_device_count, device_count_in, location_in};
use crate::{
    Location, MobilityError, MobilityModel, MobilityResult, MobilityState, MoveScheduler,
    Relocation,
};

/// Places each device uniformly at random at initialization and leaves it
/// there.  Arms no relocation events.
///
/// Useful as a baseline and for catalogs with a single place.
pub struct StationaryMobility {
    catalog:     Arc<PlaceCatalog>,
    chooser:     SimRng,
    state:       MobilityState,
    initialized: bool,
}

impl StationaryMobility {
    pub fn new(catalog: Arc<PlaceCatalog>, device_count: usize, seed: u64) -> MobilityResult<Self> {
        check_device_count(device_count)?;
        Ok(Self {
            chooser: SimRng::new(seed).child(0),
            state: MobilityState::new(device_count, catalog.place_count()),
            catalog,
            initialized: false,
        })
    }
}

impl MobilityModel for StationaryMobility {
    fn initialize(&mut self, _scheduler: &mut dyn MoveScheduler) -> MobilityResult<()> {
        if self.initialized {
            return Err(MobilityError::AlreadyInitialized);
        }
        let place_count = self.catalog.place_count();
        for d in 0..self.state.device_count() {
            let place = self.chooser.index(place_count);
            self.state.place(DeviceId(d as u32), place)?;
        }
        self.initialized = true;
        debug!(devices = self.state.device_count(), places = place_count, "stationary mobility initialized");
        Ok(())
    }

    fn move_device(
        &mut self,
        _device:    DeviceId,
        _scheduler: &mut dyn MoveScheduler,
    ) -> MobilityResult<Relocation> {
        Err(MobilityError::Unsupported("stationary devices never relocate"))
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
