//! Curve computation and display formatting.

pub mod percent;
pub mod segments;
pub mod weights;

pub use percent::{format_percentage, get_percentage};
pub use segments::{segments, summarize, Segment, SegmentSummary};
pub use weights::{
    calculate_default_weights, calculate_weights, raw_weight, try_calculate_weights, WeightCurve,
};
