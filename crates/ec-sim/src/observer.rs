//! Simulation observer trait for progress reporting and data collection.

use ec_catalog::PlaceCatalog;
use ec_core::SimTime;
use ec_mobility::{MobilityState, Relocation};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — relocation counter
///
/// ```rust,ignore
/// struct Counter(u64);
///
/// impl SimObserver for Counter {
///     fn on_relocation(&mut self, _reloc: &Relocation) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after the model has placed every device.
    ///
    /// `scheduled` is the number of relocation events the model armed.
    fn on_initialized(&mut self, _time: SimTime, _scheduled: usize) {}

    /// Called after every completed relocation.
    fn on_relocation(&mut self, _relocation: &Relocation) {}

    /// Called every `config.snapshot_interval` simulated seconds with the
    /// occupancy of every place (indexed like `catalog.places()`).
    fn on_snapshot(&mut self, _time: SimTime, _catalog: &PlaceCatalog, _state: &MobilityState) {}

    /// Called once when the run reaches its end time.
    fn on_sim_end(&mut self, _end: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
