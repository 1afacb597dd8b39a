//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ec_catalog::PlaceCatalog;
use ec_core::SimTime;
use ec_mobility::{MobilityState, Relocation};
use ec_sim::SimObserver;
use tracing::warn;

use crate::row::{OccupancyRow, RelocationRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Relocation rows buffered before each write.
const BATCH: usize = 4_096;

/// A [`SimObserver`] that writes the relocation trace and occupancy
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<RelocationRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Vec::with_capacity(BATCH),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_relocations(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors suppressed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_relocation(&mut self, relocation: &Relocation) {
        self.pending.push(RelocationRow {
            time:         relocation.at.secs(),
            device_id:    relocation.device.0,
            from_place:   relocation.from.0,
            to_place:     relocation.to.0,
            dwell:        relocation.dwell,
            next_move_at: relocation.next_move_at.secs(),
        });
        if self.pending.len() >= BATCH {
            self.flush_pending();
        }
    }

    fn on_snapshot(&mut self, time: SimTime, catalog: &PlaceCatalog, state: &MobilityState) {
        let time = time.secs();
        let rows: Vec<OccupancyRow> = catalog
            .places()
            .iter()
            .zip(state.occupancy_all())
            .map(|(place, &count)| OccupancyRow {
                time,
                place_id: place.id.0,
                device_count: count,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_occupancy(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _end: SimTime) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
