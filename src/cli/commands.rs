//! CLI command implementations.

use std::path::Path;

use crate::engine::{format_percentage, get_percentage, segments, summarize, WeightCurve};
use crate::types::{CurveConfig, NtResult};

/// Resolve curve parameters: defaults, then an optional TOML file, then flags.
pub fn resolve_config(
    config_path: Option<&Path>,
    total_items: Option<i64>,
    steepness: Option<f64>,
) -> NtResult<CurveConfig> {
    let mut config = match config_path {
        Some(path) => CurveConfig::load(path)?,
        None => CurveConfig::default(),
    };
    if let Some(n) = total_items {
        config.total_items = n;
    }
    if let Some(s) = steepness {
        config.steepness = s;
    }
    Ok(config)
}

/// Print every unit's weight and percentage.
pub fn cmd_weights(config: CurveConfig, strict: bool, decimals: usize, json: bool) -> NtResult<()> {
    let curve = WeightCurve::from(config);
    let weights = if strict {
        curve.try_weights()?
    } else {
        curve.weights()
    };

    if json {
        let info = serde_json::json!({
            "total_items": config.total_items,
            "steepness": config.steepness,
            "segments": segments(&weights),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Curve: {} units, steepness {}",
            config.total_items, config.steepness
        );
        for (i, w) in weights.iter().enumerate() {
            println!("  {:>4}  {}", i + 1, format_percentage(*w, decimals));
        }
    }
    Ok(())
}

/// Print a single weight as a percentage string.
pub fn cmd_percent(weight: f64, json: bool) -> NtResult<()> {
    let percentage = get_percentage(weight);
    if json {
        println!(
            "{}",
            serde_json::json!({"weight": weight, "percentage": percentage})
        );
    } else {
        println!("{}", percentage);
    }
    Ok(())
}

/// Print aggregate figures for a curve.
pub fn cmd_summary(config: CurveConfig, json: bool) -> NtResult<()> {
    let weights = WeightCurve::from(config).weights();
    let summary = summarize(&weights);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
    } else {
        println!("Curve Summary:");
        println!("  Units: {}", summary.count);
        println!("  Steepness: {}", config.steepness);
        println!("  Total: {:.6}", summary.total);
        println!("  First unit: {}", get_percentage(summary.first));
        println!("  Last unit: {}", get_percentage(summary.last));
        println!("  First/last ratio: {:.2}", summary.ratio);
    }
    Ok(())
}
