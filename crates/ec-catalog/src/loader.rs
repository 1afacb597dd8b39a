//! CSV catalog loader.
//!
//! # CSV formats
//!
//! Places, one row each, in catalog order:
//!
//! ```csv
//! place_id,attractiveness
//! 0,0
//! 1,1
//! 2,2
//! ```
//!
//! Dwell table, one row per attractiveness class (mean in simulated seconds):
//!
//! ```csv
//! attractiveness,mean_dwell_time
//! 0,480.0
//! 1,300.0
//! 2,120.0
//! ```
//!
//! Both files are parsed fully and then handed to [`PlaceCatalogBuilder`],
//! so a loaded catalog is validated exactly like one built in code.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ec_core::{AttractivenessClass, PlaceId};

use crate::{CatalogError, CatalogResult, PlaceCatalog, PlaceCatalogBuilder};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlaceRecord {
    place_id:       u32,
    attractiveness: u8,
}

#[derive(Deserialize)]
struct DwellRecord {
    attractiveness:  u8,
    mean_dwell_time: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalog from a places CSV and a dwell-table CSV on disk.
pub fn load_catalog_csv(places: &Path, dwell_table: &Path) -> CatalogResult<PlaceCatalog> {
    let places_file = std::fs::File::open(places)?;
    let dwell_file = std::fs::File::open(dwell_table)?;
    load_catalog_reader(places_file, dwell_file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded catalogs.
pub fn load_catalog_reader<P: Read, D: Read>(places: P, dwell_table: D) -> CatalogResult<PlaceCatalog> {
    let mut builder = PlaceCatalogBuilder::new();

    let mut dwell_reader = csv::Reader::from_reader(dwell_table);
    for result in dwell_reader.deserialize::<DwellRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        builder = builder.mean_dwell(AttractivenessClass(row.attractiveness), row.mean_dwell_time);
    }

    let mut place_reader = csv::Reader::from_reader(places);
    let mut rows = 0usize;
    for result in place_reader.deserialize::<PlaceRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        builder = builder.place(PlaceId(row.place_id), AttractivenessClass(row.attractiveness));
        rows += 1;
    }

    let catalog = builder.build()?;
    debug!(places = rows, classes = catalog.dwell_table().count(), "loaded place catalog");
    Ok(catalog)
}
