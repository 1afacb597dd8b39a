//! `ec-catalog` — the set of places devices can be attached to.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`place`]   | `Place`, `PlaceCatalog`, `PlaceCatalogBuilder`              |
//! | [`loader`]  | `load_catalog_csv`, `load_catalog_reader`                   |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                          |
//!
//! A catalog is built once at simulation start, validated, and then shared
//! read-only (typically behind an `Arc`) by every mobility model.

pub mod error;
pub mod loader;
pub mod place;


pub use error::{CatalogError, CatalogResult};
pub use loader::{load_catalog_csv, load_catalog_reader};
pub use place::{Place, PlaceCatalog, PlaceCatalogBuilder};
