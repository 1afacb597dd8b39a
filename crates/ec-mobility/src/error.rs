use ec_core::{AttractivenessClass, DeviceId};
use thiserror::Error;

/// Configuration problems.  Always raised while constructing a model, never
/// from `move_device`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("nomadic mobility needs at least 2 places, catalog has {0}")]
    TooFewPlaces(usize),

    #[error("device count must be at least 1")]
    NoDevices,

    #[error("device count {0} exceeds the DeviceId range")]
    TooManyDevices(usize),

    #[error("cannot build an exponential dwell distribution for {class} (mean {mean})")]
    InvalidRate {
        class: AttractivenessClass,
        mean:  f64,
    },
}

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("device {0} does not exist")]
    UnknownDevice(DeviceId),

    #[error("no dwell-time sampler for {0}")]
    UnknownClass(AttractivenessClass),

    #[error("mobility model has not been initialized")]
    NotInitialized,

    #[error("mobility model was already initialized")]
    AlreadyInitialized,

    /// Internal state no longer matches the catalog or the device count.
    /// The simulation must stop: location queries can no longer be trusted.
    #[error("mobility invariant violated: {0}")]
    InvariantViolation(String),

    #[error("operation not supported by this mobility model: {0}")]
    Unsupported(&'static str),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
