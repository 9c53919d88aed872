//! Phase 3 tests: the `ntime` command-line tool.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

// ==================== Helpers ====================

/// Get the path to the built `ntime` binary.
fn ntime_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("ntime");
    path
}

/// Run the `ntime` CLI with the given arguments and return the output.
fn run_ntime(args: &[&str]) -> Output {
    Command::new(ntime_bin())
        .args(args)
        .output()
        .expect("Failed to run ntime")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ntime failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: assert the CLI exited with a specific code.
fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    let out = stdout_str(output);
    serde_json::from_str(&out)
        .unwrap_or_else(|e| panic!("Failed to parse output as JSON: {}\nOutput was: {}", e, out))
}

// ==================== Percent ====================

#[test]
fn test_cli_percent() {
    let output = run_ntime(&["percent", "0.123456"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "12.3456%");
}

#[test]
fn test_cli_percent_negative() {
    let output = run_ntime(&["percent", "-0.5"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output).trim(), "-50.0000%");
}

#[test]
fn test_cli_percent_json() {
    let output = run_ntime(&["--format", "json", "percent", "0.25"]);
    assert_success(&output);
    let parsed = stdout_json(&output);
    assert_eq!(parsed["percentage"], "25.0000%");
    assert_eq!(parsed["weight"], 0.25);
}

// ==================== Weights ====================

#[test]
fn test_cli_weights_json_format() {
    let output = run_ntime(&["--format", "json", "weights", "--items", "3"]);
    assert_success(&output);
    let parsed = stdout_json(&output);

    assert_eq!(parsed["total_items"], 3);
    assert_eq!(parsed["steepness"], 5.0);
    let segments = parsed["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["index"], 1);
    assert_eq!(segments[2]["index"], 3);

    let total: f64 = segments
        .iter()
        .map(|s| s["weight"].as_f64().unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn test_cli_weights_text_decimals() {
    let output = run_ntime(&[
        "weights",
        "--items",
        "5",
        "--steepness",
        "2",
        "--decimals",
        "2",
    ]);
    assert_success(&output);
    let out = stdout_str(&output);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Curve: 5 units, steepness 2");
    assert_eq!(lines.len(), 6);
    // Largest share first: ~27.38%
    assert!(lines[1].trim().starts_with("1  27."), "got {:?}", lines[1]);
    assert!(lines[1..].iter().all(|l| l.ends_with('%')));
}

#[test]
fn test_cli_weights_non_positive_count() {
    let output = run_ntime(&["--format", "json", "weights", "--items", "-5"]);
    assert_success(&output);
    let parsed = stdout_json(&output);
    assert!(parsed["segments"].as_array().unwrap().is_empty());
}

#[test]
fn test_cli_weights_unguarded_zero_steepness() {
    let output = run_ntime(&["weights", "--items", "3", "--steepness", "0"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("NaN%"));
}

#[test]
fn test_cli_weights_strict_rejects_steepness() {
    let output = run_ntime(&["weights", "--strict", "--steepness", "0"]);
    assert_exit_code(&output, 3);

    let output = run_ntime(&["weights", "--strict", "--steepness", "1e-17"]);
    assert_exit_code(&output, 3);
}

#[test]
fn test_cli_weights_strict_rejects_oversized_count() {
    let output = run_ntime(&["weights", "--strict", "--items", "9223372036854775807"]);
    assert_exit_code(&output, 3);
}

// ==================== Config ====================

#[test]
fn test_cli_weights_from_config_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "total_items = 4\nsteepness = 3.0").unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_ntime(&["--format", "json", "weights", "--config", path]);
    assert_success(&output);
    let parsed = stdout_json(&output);
    assert_eq!(parsed["total_items"], 4);
    assert_eq!(parsed["steepness"], 3.0);
    assert_eq!(parsed["segments"].as_array().unwrap().len(), 4);

    // Flags override the file
    let output = run_ntime(&["--format", "json", "weights", "--config", path, "--items", "2"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["segments"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_weights_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let output = run_ntime(&["weights", "--config", missing.to_str().unwrap()]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_cli_weights_invalid_config() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "total_items = \"many\"").unwrap();
    let output = run_ntime(&["weights", "--config", tmp.path().to_str().unwrap()]);
    assert_exit_code(&output, 3);
}

// ==================== Summary ====================

#[test]
fn test_cli_summary_json() {
    let output = run_ntime(&["--format", "json", "summary", "--items", "80"]);
    assert_success(&output);
    let parsed = stdout_json(&output);
    assert_eq!(parsed["count"], 80);
    assert!((parsed["total"].as_f64().unwrap() - 1.0).abs() < 1e-6);
    assert!(parsed["ratio"].as_f64().unwrap() > 1.0);
}

#[test]
fn test_cli_summary_text() {
    let output = run_ntime(&["summary", "--items", "10", "--steepness", "2"]);
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Curve Summary:"));
    assert!(out.contains("Units: 10"));
    assert!(out.contains("Steepness: 2"));
}
