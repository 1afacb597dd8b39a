//! The `OutputWriter` trait implemented by backend writers.

use crate::{OccupancyRow, OutputResult, RelocationRow};

pub trait OutputWriter {
    /// Write a batch of relocation rows.
    fn write_relocations(&mut self, rows: &[RelocationRow]) -> OutputResult<()>;

    /// Write one occupancy snapshot (one row per place).
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
