//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `relocations.csv`
//! - `occupancy.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OccupancyRow, OutputResult, RelocationRow};

pub const RELOCATION_HEADER: [&str; 6] =
    ["time", "device_id", "from_place", "to_place", "dwell", "next_move_at"];

pub const OCCUPANCY_HEADER: [&str; 3] = ["time", "place_id", "device_count"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    relocations: Writer<File>,
    occupancy:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut relocations = Writer::from_path(dir.join("relocations.csv"))?;
        relocations.write_record(RELOCATION_HEADER)?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(OCCUPANCY_HEADER)?;

        Ok(Self {
            relocations,
            occupancy,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_relocations(&mut self, rows: &[RelocationRow]) -> OutputResult<()> {
        for row in rows {
            self.relocations.write_record(&[
                row.time.to_string(),
                row.device_id.to_string(),
                row.from_place.to_string(),
                row.to_place.to_string(),
                row.dwell.to_string(),
                row.next_move_at.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.time.to_string(),
                row.place_id.to_string(),
                row.device_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.relocations.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}
