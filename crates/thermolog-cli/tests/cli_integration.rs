//! CLI integration tests.
//!
//! These tests drive the built binary against temporary databases and verify
//! command behaviors and output formats.

use std::path::Path;
use std::process::{Command, Output};

/// Run thermolog with the given arguments.
fn run_thermolog(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_thermolog"))
        .args(args)
        .env_remove("THERMOLOG_DB")
        .output()
        .expect("failed to run thermolog binary")
}

fn generate(db: &Path, n: u32) {
    let output = run_thermolog(&[
        "generate",
        "--filename",
        db.to_str().unwrap(),
        "--number-of-points",
        &n.to_string(),
    ]);
    assert!(output.status.success(), "generate should succeed");
}

#[test]
fn test_help_lists_commands() {
    let output = run_thermolog(&["--help"]);

    assert!(output.status.success(), "help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("generate"), "help should list generate");
    assert!(stdout.contains("query"), "help should list query");
    assert!(stdout.contains("list"), "help should list list");
}

#[test]
fn test_version() {
    let output = run_thermolog(&["--version"]);

    assert!(output.status.success(), "version should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("thermolog"));
}

#[test]
fn test_subcommand_help() {
    for cmd in ["generate", "query", "list", "config"] {
        let output = run_thermolog(&[cmd, "--help"]);
        assert!(output.status.success(), "{} --help should succeed", cmd);
        assert!(!output.stdout.is_empty(), "{} --help should produce output", cmd);
    }
}

#[test]
fn test_generate_reports_inserted_count() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");

    let output = run_thermolog(&["generate", "--filename", db.to_str().unwrap(), "-n", "10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Inserted 10 points"), "got: {}", stdout);
    assert!(db.exists(), "database file should be created");
}

#[test]
fn test_query_text_summary() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 10);

    let output = run_thermolog(&["query", "--filename", db.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total points:   10"), "got: {}", stdout);
    assert!(stdout.contains("Duration:       9 s"), "got: {}", stdout);
    assert!(stdout.contains("Selected:       4"), "got: {}", stdout);
}

#[test]
fn test_query_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 10);

    let output = run_thermolog(&[
        "query",
        "--filename",
        db.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("query --format json should emit JSON");

    assert_eq!(summary["total"], 10);
    assert_eq!(summary["duration_seconds"], 9.0);
    assert_eq!(summary["selected"], 4);
    assert_eq!(summary["first"]["temperature"], 20.5);
}

#[test]
fn test_query_empty_store_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("empty.db");
    generate(&db, 0);

    let output = run_thermolog(&["query", "--filename", db.to_str().unwrap()]);

    assert!(!output.status.success(), "query on empty store should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no points"), "got: {}", stderr);
}

#[test]
fn test_generate_zero_points_leaves_count_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 5);
    generate(&db, 0);

    let output = run_thermolog(&[
        "list",
        "--filename",
        db.to_str().unwrap(),
        "--format",
        "csv",
        "--no-header",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 5, "got: {}", stdout);
}

#[test]
fn test_generate_appends_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 3);
    generate(&db, 2);

    let output = run_thermolog(&[
        "list",
        "--filename",
        db.to_str().unwrap(),
        "--format",
        "csv",
        "--no-header",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 5);
}

#[test]
fn test_list_csv_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 2);

    let output = run_thermolog(&["list", "--filename", db.to_str().unwrap(), "--format", "csv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("id,time,temperature"));
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_list_json_points() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 3);

    let output = run_thermolog(&[
        "list",
        "--filename",
        db.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let points: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(points.as_array().unwrap().len(), 3);
    assert_eq!(points[0]["temperature"], 20.5);
}

#[test]
fn test_list_respects_count_limit() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("points.db");
    generate(&db, 10);

    let output = run_thermolog(&[
        "list",
        "--filename",
        db.to_str().unwrap(),
        "--format",
        "csv",
        "--no-header",
        "--count",
        "4",
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 4);
}

#[test]
fn test_completions_generate() {
    let output = run_thermolog(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn test_config_path_prints_location() {
    let output = run_thermolog(&["config", "path"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("config.toml"));
}
