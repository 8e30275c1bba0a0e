//! Error types for the beaming model

use thiserror::Error;

/// Errors that can occur in the photometric model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeamingError {
    /// Passband code outside the supported U/B/V/I set.
    #[error("unknown passband code: {0:?}")]
    InvalidPassband(String),

    /// Both components sit below the beaming temperature floor, so the
    /// combined stationary flux is zero and no magnitude is defined.
    #[error("degenerate system: combined stationary flux is zero")]
    DegenerateSystem,
}
