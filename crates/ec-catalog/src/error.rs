use ec_core::{AttractivenessClass, PlaceId};
use thiserror::Error;

/// Configuration errors in the place catalog.  All of them are raised while
/// building the catalog, never during a run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("place catalog is empty")]
    Empty,

    #[error("place {0} is defined more than once")]
    DuplicatePlace(PlaceId),

    #[error("place {place} has {class}, which has no mean dwell time")]
    MissingClass {
        place: PlaceId,
        class: AttractivenessClass,
    },

    #[error("mean dwell time for {class} must be positive and finite, got {mean}")]
    InvalidMeanDwell {
        class: AttractivenessClass,
        mean:  f64,
    },

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
