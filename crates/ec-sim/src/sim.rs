//! The `Sim` struct and its event loop.

use ec_core::{DeviceId, SimConfig, SimTime};
use ec_mobility::{MobilityModel, MoveScheduler, Relocation};
use tracing::{debug, info};

use crate::{EventQueue, SimObserver, SimResult};

// ── Kernel handle ─────────────────────────────────────────────────────────────

/// The scheduler view handed to the model during a callback.
///
/// Borrows only the queue, so the model (another field of `Sim`) can be
/// borrowed mutably at the same time.
struct Kernel<'a> {
    now:   SimTime,
    queue: &'a mut EventQueue,
}

impl MoveScheduler for Kernel<'_> {
    fn now(&self) -> SimTime {
        self.now
    }

    fn schedule_at(&mut self, device: DeviceId, at: SimTime) {
        self.queue.push(at, device);
    }
}

// ── Snapshot cadence ──────────────────────────────────────────────────────────

/// The `k`-th snapshot is due at `origin + k * interval`.
///
/// Times are derived from the index rather than accumulated, so a step below
/// the clock's resolution can repeat an instant but never stalls the index.
#[derive(Copy, Clone, Debug)]
struct SnapshotClock {
    origin:   SimTime,
    interval: f64,
    next:     u64,
    last:     Option<SimTime>,
}

impl SnapshotClock {
    fn new(origin: SimTime, interval: f64) -> Self {
        Self { origin, interval, next: 0, last: None }
    }

    fn due(&self) -> SimTime {
        self.origin.after(self.next as f64 * self.interval)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// What a completed run did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub relocations:       u64,
    /// Events still pending at `end_time`, dropped undelivered.
    pub pending_discarded: usize,
    pub end:               SimTime,
}

/// The simulation runner.
///
/// Owns the clock, the event queue and the mobility model.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: MobilityModel> {
    /// Run configuration (device count, seed, end time, …).
    pub config: SimConfig,

    /// Current simulated time.
    pub clock: SimTime,

    /// Pending relocation events.
    pub queue: EventQueue,

    /// The mobility model being driven.
    pub model: M,

    relocations:   u64,
    snapshots:     Option<SnapshotClock>,
}

impl<M: MobilityModel> Sim<M> {
    pub(crate) fn new(config: SimConfig, start: SimTime, model: M) -> Self {
        Self {
            config,
            clock: start,
            queue: EventQueue::new(),
            model,
            relocations: 0,
            snapshots: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Initialize the model: place every device and collect its first events.
    ///
    /// Called by [`run`][Self::run] if not done already.
    pub fn initialize<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let mut kernel = Kernel { now: self.clock, queue: &mut self.queue };
        self.model.initialize(&mut kernel)?;
        self.model.verify()?;

        let scheduled = self.queue.len();
        let origin = self.clock;
        self.snapshots = self.config.snapshot_interval.map(|interval| SnapshotClock::new(origin, interval));
        debug!(devices = self.config.device_count, scheduled, clock = %self.clock, "model initialized");
        observer.on_initialized(self.clock, scheduled);
        Ok(())
    }

    /// Run until no event is due at or before `config.end_time`.
    ///
    /// Events still queued afterwards are dropped, the occupancy invariant is
    /// checked, and the clock is left at `end_time`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        if !self.model.is_initialized() {
            self.initialize(observer)?;
        }
        let end = self.config.end_time;
        info!(devices = self.config.device_count, seed = self.config.seed, %end, "simulation started");

        while self.step(observer)?.is_some() {}

        self.emit_snapshots_through(end, observer);
        if self.clock < end {
            self.clock = end;
        }
        let pending_discarded = self.queue.clear();
        self.model.verify()?;

        debug!(pending_discarded, "dropped events due after end time");
        info!(relocations = self.relocations, %end, "simulation finished");
        observer.on_sim_end(self.clock);

        Ok(RunSummary {
            relocations: self.relocations,
            pending_discarded,
            end: self.clock,
        })
    }

    /// Deliver the next event due at or before `config.end_time`.
    ///
    /// Returns `Ok(None)` when no such event remains.  Useful for tests and
    /// incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Relocation>> {
        let Some((at, device)) = self.queue.pop_due(self.config.end_time) else {
            return Ok(None);
        };
        self.emit_snapshots_through(at, observer);
        self.clock = at;

        let mut kernel = Kernel { now: self.clock, queue: &mut self.queue };
        let relocation = self.model.move_device(device, &mut kernel)?;
        if self.config.verify_every_move || cfg!(debug_assertions) {
            self.model.verify()?;
        }

        self.relocations += 1;
        observer.on_relocation(&relocation);
        Ok(Some(relocation))
    }

    /// Relocations delivered so far.
    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    fn emit_snapshots_through<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) {
        let Some(snapshots) = self.snapshots.as_mut() else {
            return;
        };
        loop {
            let due = snapshots.due();
            if due > until {
                break;
            }
            snapshots.next += 1;
            // Indices that round onto an instant already reported.
            if snapshots.last.is_some_and(|last| due <= last) {
                continue;
            }
            snapshots.last = Some(due);
            observer.on_snapshot(due, self.model.catalog(), self.model.state());
        }
    }
}
