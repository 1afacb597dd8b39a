use ec_core::CoreError;
use ec_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("model tracks {got} devices but the config asks for {expected}")]
    DeviceCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
