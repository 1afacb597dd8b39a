//! Places and the validated catalog.

use std::collections::{BTreeMap, HashMap};

use ec_core::{AttractivenessClass, PlaceId};

use crate::{CatalogError, CatalogResult};

/// One place a device can be attached to (an edge datacenter / WLAN access
/// point).  Immutable once loaded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id:    PlaceId,
    pub class: AttractivenessClass,
}

/// Ordered list of places plus the attractiveness → mean dwell time table.
///
/// Places keep their configuration order; that order defines the *place
/// index* (`0..place_count`) used by per-place arrays in the mobility state.
/// Construct via [`PlaceCatalogBuilder`] or the CSV loaders, both of which
/// validate:
///
/// - at least one place;
/// - unique place ids;
/// - every mean dwell time finite and `> 0`;
/// - every class referenced by a place present in the dwell table.
#[derive(Clone, Debug)]
pub struct PlaceCatalog {
    places:     Vec<Place>,
    index:      HashMap<PlaceId, usize>,
    mean_dwell: BTreeMap<AttractivenessClass, f64>,
}

impl PlaceCatalog {
    #[inline]
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// The place stored at `index`, or `None` if out of range.
    #[inline]
    pub fn place_at(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    #[inline]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Storage index for `id`.  O(1).
    #[inline]
    pub fn index_of(&self, id: PlaceId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Mean dwell time for `class`, in simulated seconds.
    #[inline]
    pub fn mean_dwell_time(&self, class: AttractivenessClass) -> Option<f64> {
        self.mean_dwell.get(&class).copied()
    }

    /// `(class, mean dwell time)` pairs in ascending class order.
    pub fn dwell_table(&self) -> impl Iterator<Item = (AttractivenessClass, f64)> + '_ {
        self.mean_dwell.iter().map(|(&c, &m)| (c, m))
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for a [`PlaceCatalog`].
///
/// ```rust,ignore
/// let catalog = PlaceCatalogBuilder::new()
///     .place(PlaceId(0), AttractivenessClass(0))
///     .place(PlaceId(1), AttractivenessClass(1))
///     .mean_dwell(AttractivenessClass(0), 480.0)
///     .mean_dwell(AttractivenessClass(1), 300.0)
///     .build()?;
/// ```
#[derive(Default)]
pub struct PlaceCatalogBuilder {
    places:     Vec<Place>,
    mean_dwell: BTreeMap<AttractivenessClass, f64>,
}

impl PlaceCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a place.  Order of calls is the catalog order.
    pub fn place(mut self, id: PlaceId, class: AttractivenessClass) -> Self {
        self.places.push(Place { id, class });
        self
    }

    /// Set the mean dwell time for `class`.  A later call for the same class
    /// replaces the earlier value.
    pub fn mean_dwell(mut self, class: AttractivenessClass, mean: f64) -> Self {
        self.mean_dwell.insert(class, mean);
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> CatalogResult<PlaceCatalog> {
        if self.places.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (&class, &mean) in &self.mean_dwell {
            if !(mean.is_finite() && mean > 0.0) {
                return Err(CatalogError::InvalidMeanDwell { class, mean });
            }
        }

        let mut index = HashMap::with_capacity(self.places.len());
        for (i, place) in self.places.iter().enumerate() {
            if index.insert(place.id, i).is_some() {
                return Err(CatalogError::DuplicatePlace(place.id));
            }
            if !self.mean_dwell.contains_key(&place.class) {
                return Err(CatalogError::MissingClass {
                    place: place.id,
                    class: place.class,
                });
            }
        }

        Ok(PlaceCatalog {
            places: self.places,
            index,
            mean_dwell: self.mean_dwell,
        })
    }
}
