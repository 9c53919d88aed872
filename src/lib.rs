//! Nonlinear time: weighting curves for subjective time.
//!
//! Assigns each discrete unit of a span (e.g. each year of a lifespan) a
//! share of 1.0 that decays as `1 / ln(t + steepness)`, on the premise that
//! time feels faster with age, and formats those shares as percentages for
//! proportional display.

pub mod cli;
pub mod engine;
pub mod types;

// Re-export commonly used items at the crate root
pub use engine::{
    calculate_default_weights, calculate_weights, format_percentage, get_percentage, raw_weight,
    segments, summarize, try_calculate_weights, Segment, SegmentSummary, WeightCurve,
};
pub use types::{
    CurveConfig, NtError, NtResult, DEFAULT_STEEPNESS, DEFAULT_TOTAL_ITEMS, MAX_TOTAL_ITEMS,
    PERCENT_DECIMALS,
};
