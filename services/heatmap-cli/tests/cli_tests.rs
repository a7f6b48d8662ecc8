//! Tests for the command-line glue: stdin/stdout handling, exit codes and
//! the installed binaries.

use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

use heatmap_cli::{exit_code_for, run, CliConfig};
use heatmap_common::Profile;
use test_utils::{assert_png, fixtures, generate_week_document};

// ============================================================================
// Helper functions
// ============================================================================

fn run_str(profile: Profile, input: &str) -> (anyhow::Result<()>, Vec<u8>) {
    let mut output = Vec::new();
    let result = run(
        profile,
        Cursor::new(input.as_bytes()),
        &mut output,
        &CliConfig::default(),
    )
    .map(|_| ());
    (result, output)
}

/// Run an installed binary with `input` on stdin.
fn run_binary(path: &str, input: &str) -> std::process::Output {
    let mut child = Command::new(path)
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

// ============================================================================
// run()
// ============================================================================

#[test]
fn test_day_document_writes_png() {
    let (result, output) = run_str(Profile::Day, fixtures::day::SPARSE);
    result.unwrap();
    assert_png!(output);

    let image = image::load_from_memory(&output).unwrap();
    assert!(image.width() > 24 * 180);
}

#[test]
fn test_week_document_writes_png() {
    let (result, output) = run_str(Profile::Week, fixtures::week::PARTIAL);
    result.unwrap();
    assert_png!(output);
}

#[test]
fn test_output_is_reproducible() {
    let json = generate_week_document(21, 5);
    let (_, first) = run_str(Profile::Week, &json);
    let (_, second) = run_str(Profile::Week, &json);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_malformed_input_writes_nothing() {
    for input in [
        fixtures::invalid::NOT_JSON,
        fixtures::invalid::TRUNCATED,
        fixtures::invalid::NOT_AN_OBJECT,
        fixtures::invalid::NAME_MISSING,
        fixtures::day::HOUR_OUT_OF_RANGE,
        fixtures::day::CONFLICTING,
    ] {
        let (result, output) = run_str(Profile::Day, input);
        let err = result.unwrap_err();
        assert_eq!(exit_code_for(&err), 65, "input: {}", input);
        assert!(output.is_empty());
    }
}

#[test]
fn test_wrong_profile_is_malformed() {
    let (result, output) = run_str(Profile::Week, fixtures::day::SPARSE);
    assert_eq!(exit_code_for(&result.unwrap_err()), 65);
    assert!(output.is_empty());
}

#[test]
fn test_empty_document_is_render_error() {
    let (result, output) = run_str(Profile::Day, fixtures::day::EMPTY);
    let err = result.unwrap_err();
    assert_eq!(exit_code_for(&err), 70);
    assert!(format!("{:#}", err).contains("No counters to render"));
    assert!(output.is_empty());
}

#[test]
fn test_alt_text_returned() {
    let mut output = Vec::new();
    let rendered = run(
        Profile::Day,
        Cursor::new(fixtures::day::FULL.as_bytes()),
        &mut output,
        &CliConfig::default(),
    )
    .unwrap();
    assert_eq!(rendered.png, output);
    assert!(rendered
        .alt_text
        .unwrap()
        .contains("from the Vernon counter"));
}

#[test]
fn test_non_heatmap_error_uses_generic_code() {
    let err = anyhow::anyhow!("something else");
    assert_eq!(exit_code_for(&err), 1);
}

// ============================================================================
// Binaries
// ============================================================================

#[test]
fn test_day_binary_success() {
    let out = run_binary(env!("CARGO_BIN_EXE_day-heatmap"), fixtures::day::FULL);
    assert!(out.status.success());
    assert_png!(out.stdout);
}

#[test]
fn test_week_binary_success() {
    let out = run_binary(env!("CARGO_BIN_EXE_week-heatmap"), fixtures::week::PARTIAL);
    assert!(out.status.success());
    assert_png!(out.stdout);
}

#[test]
fn test_binary_malformed_input_exit_code() {
    let out = run_binary(env!("CARGO_BIN_EXE_day-heatmap"), fixtures::invalid::NOT_JSON);
    assert_eq!(out.status.code(), Some(65));
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_binary_empty_document_exit_code() {
    let out = run_binary(env!("CARGO_BIN_EXE_week-heatmap"), fixtures::week::EMPTY);
    assert_eq!(out.status.code(), Some(70));
    assert!(out.stdout.is_empty());
}
