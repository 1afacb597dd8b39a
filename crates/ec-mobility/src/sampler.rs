//! Exponential dwell-time sampling, one independent stream per class.

use std::collections::BTreeMap;

use ec_catalog::PlaceCatalog;
use ec_core::{AttractivenessClass, SimRng};
use rand_distr::{Distribution, Exp};

use crate::{ConfigError, MobilityError, MobilityResult};

/// Child-stream offset of class 0.  Offset 0 is the place chooser.
pub(crate) const CLASS_STREAM_BASE: u64 = 1;

struct ClassStream {
    mean: f64,
    dist: Exp<f64>,
    rng:  SimRng,
}

/// How long a device stays at a place before relocating.
///
/// Holds one exponential distribution per attractiveness class in the
/// catalog's dwell table, with rate `1 / mean`.  Each class draws from its
/// own RNG stream, so the sequence for one class is fixed by the seed alone
/// and does not depend on how often other classes are sampled.
pub struct DwellTimeSampler {
    streams: BTreeMap<AttractivenessClass, ClassStream>,
}

impl DwellTimeSampler {
    /// One stream per entry of `catalog`'s dwell table, derived from `root`.
    pub fn from_catalog(catalog: &PlaceCatalog, root: &SimRng) -> MobilityResult<Self> {
        let mut streams = BTreeMap::new();
        for (class, mean) in catalog.dwell_table() {
            let dist = Exp::new(1.0 / mean).map_err(|_| ConfigError::InvalidRate { class, mean })?;
            let rng = root.child(CLASS_STREAM_BASE + class.0 as u64);
            streams.insert(class, ClassStream { mean, dist, rng });
        }
        Ok(Self { streams })
    }

    /// Draw a non-negative dwell duration for a device at a place of `class`.
    pub fn sample(&mut self, class: AttractivenessClass) -> MobilityResult<f64> {
        let stream = self
            .streams
            .get_mut(&class)
            .ok_or(MobilityError::UnknownClass(class))?;
        Ok(stream.dist.sample(stream.rng.inner()))
    }

    /// Configured mean for `class`.
    pub fn mean(&self, class: AttractivenessClass) -> Option<f64> {
        self.streams.get(&class).map(|s| s.mean)
    }

    pub fn class_count(&self) -> usize {
        self.streams.len()
    }
}
