//! `ec-output` — simulation output writers.
//!
//! | Backend | Files created                           |
//! |---------|-----------------------------------------|
//! | CSV     | `relocations.csv`, `occupancy.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `ec_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ec_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{OccupancyRow, RelocationRow};
pub use writer::OutputWriter;
