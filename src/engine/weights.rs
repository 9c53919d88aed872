//! Inverse-logarithmic weighting of discrete time units.

use crate::types::{CurveConfig, NtError, NtResult, DEFAULT_STEEPNESS, MAX_TOTAL_ITEMS};

use super::segments::{segments, Segment};

/// Raw (unnormalized) weight of unit `t`.
///
/// Formula: 1 / ln(t + steepness)
pub fn raw_weight(t: u64, steepness: f64) -> f64 {
    1.0 / (t as f64 + steepness).ln()
}

/// Calculate normalized weights for units `1..=total_items`.
///
/// Index 0 of the result is unit 1, the largest share. The weights sum to 1.0
/// and are non-increasing for any positive steepness. A non-positive
/// `total_items` yields an empty vector.
///
/// The steepness is not validated. If `1 + steepness <= 1` the first logarithm
/// is zero or negative and the curve comes out non-finite or negative; use
/// [`try_calculate_weights`] to reject such input instead.
pub fn calculate_weights(total_items: i64, steepness: f64) -> Vec<f64> {
    if total_items <= 0 {
        return Vec::new();
    }

    let (raw, total_raw) = raw_curve(total_items as u64, steepness);

    if !total_raw.is_finite() || !(raw[0].is_finite() && raw[0] > 0.0) {
        log::warn!(
            "Degenerate curve for steepness {}: first raw weight {}, total {}",
            steepness,
            raw[0],
            total_raw
        );
    }

    normalize(raw, total_raw)
}

/// [`calculate_weights`] with [`DEFAULT_STEEPNESS`].
pub fn calculate_default_weights(total_items: i64) -> Vec<f64> {
    calculate_weights(total_items, DEFAULT_STEEPNESS)
}

/// Like [`calculate_weights`], but rejects a steepness that would make any
/// logarithm non-positive, a count above [`MAX_TOTAL_ITEMS`], and any curve
/// whose raw total is not finite.
pub fn try_calculate_weights(total_items: i64, steepness: f64) -> NtResult<Vec<f64>> {
    // Compare the sum itself: 1.0 + 1e-17 rounds to 1.0. NaN fails too.
    if !(steepness.is_finite() && 1.0 + steepness > 1.0) {
        return Err(NtError::InvalidSteepness(steepness));
    }
    if total_items <= 0 {
        return Ok(Vec::new());
    }
    if total_items > MAX_TOTAL_ITEMS {
        return Err(NtError::TooManyItems {
            count: total_items,
            max: MAX_TOTAL_ITEMS,
        });
    }

    let count = total_items as u64;
    let (raw, total_raw) = raw_curve(count, steepness);
    if !total_raw.is_finite() || total_raw <= 0.0 {
        // An overflowing sum with no bad unit points at the last one.
        let (index, value) = degenerate_unit(&raw).unwrap_or((count, total_raw));
        return Err(NtError::NonFiniteWeight { index, value });
    }

    Ok(normalize(raw, total_raw))
}

fn raw_curve(count: u64, steepness: f64) -> (Vec<f64>, f64) {
    let mut raw = Vec::with_capacity(count as usize);
    let mut total_raw = 0.0;
    for t in 1..=count {
        let w = raw_weight(t, steepness);
        raw.push(w);
        total_raw += w;
    }
    log::debug!(
        "Computed {} raw weights (steepness {}), total {}",
        count,
        steepness,
        total_raw
    );
    (raw, total_raw)
}

/// First unit (1-based) whose raw weight is not finite and positive.
fn degenerate_unit(raw: &[f64]) -> Option<(u64, f64)> {
    raw.iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        .map(|(i, &w)| (i as u64 + 1, w))
}

fn normalize(mut raw: Vec<f64>, total_raw: f64) -> Vec<f64> {
    for w in &mut raw {
        *w /= total_raw;
    }
    raw
}

/// A weighting curve over a fixed number of units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCurve {
    total_items: i64,
    steepness: f64,
}

impl WeightCurve {
    /// Create a curve with the default steepness.
    pub fn new(total_items: i64) -> Self {
        Self {
            total_items,
            steepness: DEFAULT_STEEPNESS,
        }
    }

    /// Set the steepness offset.
    pub fn with_steepness(mut self, steepness: f64) -> Self {
        self.steepness = steepness;
        self
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    /// Normalized weights, unguarded.
    pub fn weights(&self) -> Vec<f64> {
        calculate_weights(self.total_items, self.steepness)
    }

    /// Normalized weights, rejecting a degenerate steepness.
    pub fn try_weights(&self) -> NtResult<Vec<f64>> {
        try_calculate_weights(self.total_items, self.steepness)
    }

    /// Display segments for the curve, unguarded.
    pub fn segments(&self) -> Vec<Segment> {
        segments(&self.weights())
    }
}

impl From<CurveConfig> for WeightCurve {
    fn from(config: CurveConfig) -> Self {
        Self::new(config.total_items).with_steepness(config.steepness)
    }
}

impl Default for WeightCurve {
    fn default() -> Self {
        CurveConfig::default().into()
    }
}
