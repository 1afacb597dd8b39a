//! Base error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the few
//! failure modes of the primitives in this crate (mostly rejecting bad
//! configuration values before they reach a model).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ec-core`.
pub type CoreResult<T> = Result<T, CoreError>;
