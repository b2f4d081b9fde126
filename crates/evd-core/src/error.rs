//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::SimTime;

/// The error type for `evd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid {distribution} distribution: {reason}")]
    Distribution {
        distribution: &'static str,
        reason:       String,
    },

    #[error("clock cannot move backwards from {now} to {requested}")]
    TimeWentBackwards { now: SimTime, requested: SimTime },
}

/// Shorthand result type for `evd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
