//! Percentage strings for proportional display.

use crate::types::PERCENT_DECIMALS;

/// Format a weight as a percentage with four decimals, e.g. `0.123456` -> `"12.3456%"`.
///
/// The input is not range-checked.
pub fn get_percentage(weight: f64) -> String {
    format_percentage(weight, PERCENT_DECIMALS)
}

/// Format a weight as a percentage with `decimals` digits after the point.
///
/// Non-finite values render as `NaN%`, `Infinity%` or `-Infinity%`. A
/// negative zero renders without its sign.
pub fn format_percentage(weight: f64, decimals: usize) -> String {
    let value = weight * 100.0;
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        };
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}%", decimals, value)
}
