//! Error types for the orrery engine.

use thiserror::Error;

/// Rejection reasons for body construction.
///
/// Force computation divides by mass, so a body with zero, negative, or
/// non-finite mass is refused up front rather than letting the tick
/// produce NaNs later.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BodyError {
    #[error("body mass must be positive, got {mass}")]
    NonPositiveMass { mass: f64 },

    #[error("body mass must be finite")]
    NonFiniteMass,
}

pub type Result<T> = std::result::Result<T, BodyError>;
