//! Integration tests for CLI argument handling
//!
//! Tests the flag surface of the binary without entering the TUI.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skycast"))
        .args(args)
        .output()
        .expect("Failed to execute skycast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycast"), "Help should mention skycast");
    assert!(stdout.contains("city"), "Help should mention --city flag");
    assert!(stdout.contains("lat"), "Help should mention --lat flag");
    assert!(
        stdout.contains("api-base"),
        "Help should mention --api-base flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycast"));
}

#[test]
fn test_non_numeric_latitude_prints_error_and_exits() {
    let output = run_cli(&["--lat", "north"]);
    assert!(
        !output.status.success(),
        "Expected non-numeric latitude to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid") || stderr.contains("error"),
        "Should print a parse error: {}",
        stderr
    );
}

#[test]
fn test_unknown_flag_fails() {
    let output = run_cli(&["--radar"]);
    assert!(!output.status.success(), "Expected unknown flag to fail");
}
