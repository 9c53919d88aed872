//! Error types for the nonlinear-time library.

use thiserror::Error;

/// All errors that can occur in the nonlinear-time library.
#[derive(Error, Debug)]
pub enum NtError {
    /// Steepness would put the first unit at or below the logarithm's zero.
    #[error("Steepness must be finite and keep ln(1 + steepness) positive: {0}")]
    InvalidSteepness(f64),

    /// Unit count exceeds the strict-path limit.
    #[error("Too many units: {count} > {max}")]
    TooManyItems { count: i64, max: i64 },

    /// A raw weight or the raw total came out non-finite.
    #[error("Non-finite weight at unit {index}: {value}")]
    NonFiniteWeight { index: u64, value: f64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for nonlinear-time operations.
pub type NtResult<T> = Result<T, NtError>;
