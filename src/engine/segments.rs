//! Proportional display segments built from a weight sequence.

use serde::Serialize;

use super::percent::get_percentage;

/// One unit of the curve, ready to render as a proportional segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// 1-based unit index (`t`).
    pub index: u64,
    /// Normalized weight of the unit.
    pub weight: f64,
    /// `weight` as a four-decimal percentage string.
    pub percentage: String,
}

/// Aggregate view of a weight sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentSummary {
    /// Number of units.
    pub count: usize,
    /// Sum of all weights (1.0 for a normalized curve).
    pub total: f64,
    /// Weight of the first unit.
    pub first: f64,
    /// Weight of the last unit.
    pub last: f64,
    /// first / last: how many times larger the earliest unit is.
    pub ratio: f64,
}

/// Pair each weight with its unit index and percentage string.
pub fn segments(weights: &[f64]) -> Vec<Segment> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| Segment {
            index: i as u64 + 1,
            weight,
            percentage: get_percentage(weight),
        })
        .collect()
}

/// Summarize a weight sequence. An empty sequence summarizes to zeros.
pub fn summarize(weights: &[f64]) -> SegmentSummary {
    let (first, last) = match (weights.first(), weights.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return SegmentSummary {
                count: 0,
                total: 0.0,
                first: 0.0,
                last: 0.0,
                ratio: 0.0,
            }
        }
    };

    SegmentSummary {
        count: weights.len(),
        total: weights.iter().sum(),
        first,
        last,
        ratio: first / last,
    }
}
