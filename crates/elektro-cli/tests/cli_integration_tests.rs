//! CLI integration tests
//!
//! These tests verify that the CLI correctly delegates to the core and
//! engine layers, by spawning the built binary against file fixtures.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> std::process::Output {
    let cli_bin = env!("CARGO_BIN_EXE_elektro-cli");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_hash_prints_canonical_digest() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "config.json", r#"{"tau": 20, "cells": []}"#);

    let output = run(&["hash", config.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let digest = stdout.trim();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_hash_is_key_order_independent() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(&dir, "a.json", r#"{"a": 1, "b": [2, 3]}"#);
    let b = write_fixture(&dir, "b.json", r#"{"b": [3, 2], "a": 1}"#);

    let out_a = run(&["hash", a.to_str().unwrap()]);
    let out_b = run(&["hash", b.to_str().unwrap()]);

    assert!(out_a.status.success());
    assert_eq!(out_a.stdout, out_b.stdout);
}

#[test]
fn test_hash_precision_changes_digest() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "config.json", r#"{"x": 1.23456}"#);

    let default_precision = run(&["hash", config.to_str().unwrap()]);
    let coarse = run(&["hash", config.to_str().unwrap(), "--precision", "2"]);

    assert!(coarse.status.success());
    assert_ne!(default_precision.stdout, coarse.stdout);
}

#[test]
fn test_diff_renders_human_summary() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(&dir, "a.json", r#"{"a": 1, "b": 2}"#);
    let b = write_fixture(&dir, "b.json", r#"{"b": 3, "c": 4}"#);

    let output = run(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("## Config Diff"));
    assert!(stdout.contains("**Removed** `a`"));
    assert!(stdout.contains("**Added** `c`"));
    assert!(stdout.contains("**Changed** `b`"));
}

#[test]
fn test_diff_json_emits_structured_records() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(&dir, "a.json", r#"{"v": [1, 2, 3]}"#);
    let b = write_fixture(&dir, "b.json", r#"{"v": [1, 2, 3, 4]}"#);

    let output = run(&["diff", a.to_str().unwrap(), b.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON");
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["kind"], "added");
    assert_eq!(records[0]["path"], serde_json::json!(["v", "3"]));
    assert_eq!(records[0]["new_value"], 4);
}

#[test]
fn test_diff_rejects_non_mapping_root() {
    let dir = TempDir::new().unwrap();
    let a = write_fixture(&dir, "a.json", r#"[1, 2]"#);
    let b = write_fixture(&dir, "b.json", r#"{"a": 1}"#);

    let output = run(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_stats_summary() {
    let dir = TempDir::new().unwrap();
    let records = write_fixture(
        &dir,
        "records.json",
        r#"[{"tau": 10.0}, {"tau": 20.0}, {"other": 1}]"#,
    );

    let output = run(&["stats", records.to_str().unwrap(), "--field", "tau"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("count: 3"));
    assert!(stdout.contains("distinct: 2"));
    assert!(stdout.contains("sum: 30"));
}

#[test]
fn test_stats_bucketed_series() {
    let dir = TempDir::new().unwrap();
    let records = write_fixture(
        &dir,
        "records.json",
        r#"[
            {"ts": "2026-03-01T09:00:00Z", "tau": 10.0},
            {"ts": "2026-03-01T15:00:00Z", "tau": 20.0},
            {"ts": "2026-03-02T09:00:00Z", "tau": 5.0}
        ]"#,
    );

    let output = run(&[
        "stats",
        records.to_str().unwrap(),
        "--field",
        "tau",
        "--by",
        "day",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2026-03-01"));
    assert!(stdout.contains("2026-03-02"));
    assert!(stdout.contains("count=2 sum=30"));
}

#[test]
fn test_missing_file_fails_cleanly() {
    let output = run(&["hash", "/nonexistent/config.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error:"));
}
