//! Shared types for the nonlinear-time library.

pub mod config;
pub mod error;

pub use config::CurveConfig;
pub use error::{NtError, NtResult};

/// Offset added to each unit index before taking its logarithm.
pub const DEFAULT_STEEPNESS: f64 = 5.0;

/// Number of units in a default curve (years of a lifespan).
pub const DEFAULT_TOTAL_ITEMS: i64 = 80;

/// Largest unit count the strict path will allocate for.
pub const MAX_TOTAL_ITEMS: i64 = 100_000_000;

/// Digits after the decimal point in a percentage string.
pub const PERCENT_DECIMALS: usize = 4;
