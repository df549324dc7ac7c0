//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against temporary log files and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "healthlog-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn file_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_summary_on_fresh_store_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");

    let (stdout, _, code) = run_cli(&["--file", file_arg(&log), "summary"]);
    assert_eq!(code, 0, "summary on a fresh store should succeed");
    assert!(stdout.contains("No data recorded yet."));
    // The store file was created with its header as a side effect.
    assert!(log.exists());
}

#[test]
fn test_add_then_summary_json() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");

    let (_, stderr, code) = run_cli(&[
        "--file",
        file_arg(&log),
        "add",
        "--exercise",
        "30",
        "--water",
        "2.0",
        "--sleep",
        "7.5",
        "--calories",
        "2100",
    ]);
    assert_eq!(code, 0, "add failed: {stderr}");

    let (stdout, _, code) = run_cli(&["--file", file_arg(&log), "summary", "--json"]);
    assert_eq!(code, 0);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["window"].as_array().unwrap().len(), 1);
    assert_eq!(summary["averages"]["exercise_minutes"], 30.0);
    assert_eq!(summary["averages"]["calories"], 2100.0);
}

#[test]
fn test_appends_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");

    for exercise in ["10", "20", "30"] {
        let (_, stderr, code) = run_cli(&[
            "--file",
            file_arg(&log),
            "add",
            "--exercise",
            exercise,
            "--water",
            "2.0",
            "--sleep",
            "7.5",
            "--calories",
            "2100",
        ]);
        assert_eq!(code, 0, "add failed: {stderr}");
    }

    let (stdout, _, code) = run_cli(&["--file", file_arg(&log), "summary", "--json"]);
    assert_eq!(code, 0);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["window"].as_array().unwrap().len(), 3);
    assert_eq!(summary["averages"]["exercise_minutes"], 20.0);
}

#[test]
fn test_chart_renders_to_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");
    let out = dir.path().join("progress.png");

    let (_, stderr, code) = run_cli(&[
        "--file",
        file_arg(&log),
        "add",
        "--exercise",
        "30",
        "--water",
        "2.0",
        "--sleep",
        "7.5",
        "--calories",
        "2100",
    ]);
    assert_eq!(code, 0, "add failed: {stderr}");

    let (stdout, _, code) = run_cli(&[
        "--file",
        file_arg(&log),
        "chart",
        "--out",
        file_arg(&out),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Chart written to"));
    assert!(out.metadata().unwrap().len() > 0);
}

#[test]
fn test_chart_on_fresh_store_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");

    let (stdout, _, code) = run_cli(&["--file", file_arg(&log), "chart"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No data to chart yet."));
}

#[test]
fn test_summary_fails_on_foreign_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("health_log.csv");
    std::fs::write(&log, "name,age\nalice,30\n").unwrap();

    let (_, stderr, code) = run_cli(&["--file", file_arg(&log), "summary"]);
    assert_ne!(code, 0, "a foreign file must not be summarized");
    assert!(stderr.contains("unreadable"));
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(config.get("report").is_some());
}
