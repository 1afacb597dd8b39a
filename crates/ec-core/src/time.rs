//! Simulated time.
//!
//! # Design
//!
//! Dwell times are drawn from a continuous distribution, so the clock is a
//! continuous `f64` of simulated seconds rather than an integer tick.
//! `SimTime` orders with `f64::total_cmp`, which makes it a valid key for
//! ordered collections such as the event queue's `BTreeMap`.  Values built
//! from configuration go through [`SimTime::try_from_secs`], which rejects
//! NaN, infinities and negatives, so the total order never has to rank a NaN
//! in practice.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulated instant, in seconds since the start of the run.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Validate a configuration-supplied instant.
    pub fn try_from_secs(secs: f64) -> CoreResult<SimTime> {
        if secs.is_finite() && secs >= 0.0 {
            Ok(SimTime(secs))
        } else {
            Err(CoreError::Config(format!(
                "simulated time must be finite and non-negative, got {secs}"
            )))
        }
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// The instant `delay` seconds after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        self.after(rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}s", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Built by the application (or deserialized with the `serde` feature) and
/// handed to the simulation runner by value.  There is no global settings
/// object; everything a run needs is in here or in the place catalog.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of mobile devices.  Device ids are `0..device_count`.
    pub device_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Events due after this instant are never delivered.
    pub end_time: SimTime,

    /// Emit an occupancy snapshot every this many simulated seconds.
    /// `None` disables snapshots.
    pub snapshot_interval: Option<f64>,

    /// Recompute the occupancy invariant after every relocation.  Always on
    /// in debug builds; costs O(places + devices) per move.
    pub verify_every_move: bool,
}

impl SimConfig {
    /// A config with no snapshots and release-mode verification off.
    pub fn new(device_count: usize, seed: u64, end_time: SimTime) -> Self {
        Self {
            device_count,
            seed,
            end_time,
            snapshot_interval: None,
            verify_every_move: false,
        }
    }

    /// Check the values a runner cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.device_count == 0 {
            return Err(CoreError::Config("device_count must be at least 1".into()));
        }
        if u32::try_from(self.device_count).is_err() {
            return Err(CoreError::Config(format!(
                "device_count {} exceeds the DeviceId range",
                self.device_count
            )));
        }
        SimTime::try_from_secs(self.end_time.secs())?;
        match self.snapshot_interval {
            Some(interval) if !(interval.is_finite() && interval > 0.0) => Err(CoreError::Config(
                format!("snapshot_interval must be positive, got {interval}"),
            )),
            _ => Ok(()),
        }
    }
}
