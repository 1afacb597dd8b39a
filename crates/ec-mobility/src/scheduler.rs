//! The scheduler seam between a mobility model and the event kernel.

use ec_core::{DeviceId, SimTime};

/// What a mobility model needs from the discrete-event kernel.
///
/// The callback is implicit: an implementation promises that, for every
/// `schedule_at(device, at)`, it will eventually call
/// [`MobilityModel::move_device`][crate::MobilityModel::move_device] for
/// `device` exactly once, at a clock reading `>= at`, and in timestamp order
/// relative to its other pending events.  Pending events may be dropped when
/// the run ends.
pub trait MoveScheduler {
    /// The current simulated time.
    fn now(&self) -> SimTime;

    /// Request a relocation callback for `device` at `at`.
    fn schedule_at(&mut self, device: DeviceId, at: SimTime);
}
