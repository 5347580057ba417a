// ABOUTME: Integration tests for the hercules-cli binary
// ABOUTME: Runs parse, normalize, onboard, readiness, and ml-payload commands against temp files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the hercules-cli binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// Run the CLI and capture exit code, stdout, and stderr
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_hercules-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    (exit_code, stdout, stderr)
}

fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}

#[test]
fn test_help_lists_commands() {
    let (exit_code, stdout, _) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["parse-height", "parse-weight", "normalize", "onboard", "readiness", "ml-payload"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_parse_height_feet_and_inches() {
    let (exit_code, stdout, _) = run_cli(&["parse-height", "6'0\""]);

    assert_eq!(exit_code, 0);
    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert!((body["height_cm"].as_f64().unwrap() - 182.88).abs() < 1e-9);
}

#[test]
fn test_parse_weight_unknown_is_null() {
    let (exit_code, stdout, _) = run_cli(&["parse-weight", "heavy"]);

    assert_eq!(exit_code, 0);
    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["input"], "heavy");
    assert!(body["weight_lbs"].is_null());
}

#[test]
fn test_onboard_prints_profile_row() {
    let answers = json_file(&json!({
        "goal": "maintain",
        "stats": {"gender": "female", "age": 34, "height": "1.65m", "weight": "60kg"},
        "gym": "bodyweight_only",
        "experience": "beginner",
        "diet": {"diet": "all"}
    }));

    let (exit_code, stdout, stderr) = run_cli(&[
        "onboard",
        "--file",
        answers.path().to_str().unwrap(),
        "--user-id",
        "cli-user",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let record: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["user_id"], "cli-user");
    assert_eq!(record["age"], 34);
    assert!((record["height"].as_f64().unwrap() - 165.0).abs() < 1e-9);
    assert!((record["weight"].as_f64().unwrap() - 132.2772).abs() < 1e-9);
    assert_eq!(record["onboarding_completed"], true);
}

#[test]
fn test_onboard_rejects_invalid_answers() {
    let answers = json_file(&json!({"goal": "bulk"}));

    let (exit_code, stdout, _) = run_cli(&[
        "onboard",
        "--file",
        answers.path().to_str().unwrap(),
        "--user-id",
        "cli-user",
    ]);

    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_readiness_reports_missing_labels() {
    let profile = json_file(&json!({"user_id": "u1", "goal": "cut", "age": 40}));

    let (exit_code, stdout, _) = run_cli(&["readiness", "--file", profile.path().to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["complete"], false);
    assert_eq!(
        report["missing_fields"],
        json!(["Experience Level", "Gym Access", "Diet Preference", "Weight", "Height", "Gender"])
    );
}

#[test]
fn test_ml_payload_fails_for_incomplete_profile() {
    let profile = json_file(&json!({"user_id": "u1"}));

    let (exit_code, _, _) = run_cli(&["ml-payload", "--file", profile.path().to_str().unwrap()]);

    assert_ne!(exit_code, 0);
}

#[test]
fn test_missing_file_fails() {
    let (exit_code, _, stderr) = run_cli(&["normalize", "--file", "/nonexistent/answers.json"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to read"));
}
