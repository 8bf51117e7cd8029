//! The `jqgen` binary: exit status, stdout and stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::process::{Command, Output};

use jqgen::{generate, BUILTIN_FUNC_DEFINITIONS};
use pretty_assertions::assert_eq;

fn jqgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jqgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("jqgen runs")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn unknown_argument_is_a_usage_error() {
    let output = jqgen(&["bogus"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = stderr(&output);
    assert!(stderr.starts_with("error: unexpected argument `bogus`"), "{stderr}");
    assert!(stderr.contains("Usage: jqgen"), "{stderr}");
}

#[test]
fn missing_output_path_is_a_usage_error() {
    let output = jqgen(&["-o"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("requires a path"));
}

#[test]
fn help_goes_to_stdout() {
    let output = jqgen(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: jqgen"));
    assert!(output.stderr.is_empty());
}

#[test]
fn unwritable_destination_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("x.rs");
    let output = jqgen(&["-o", path.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr(&output);
    assert!(stderr.starts_with("error: failed to write "), "{stderr}");
    assert!(stderr.contains(&path.display().to_string()), "{stderr}");
    assert!(!path.exists());
}

#[test]
fn writes_the_builtin_table_to_the_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.rs");
    let output = jqgen(&["-o", path.to_str().expect("utf-8 path")]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&path).expect("output exists");
    assert_eq!(written, generate(BUILTIN_FUNC_DEFINITIONS).expect("generates"));
}

#[test]
fn writes_the_builtin_table_to_stdout_by_default() {
    let output = jqgen(&[]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf-8 output"),
        generate(BUILTIN_FUNC_DEFINITIONS).expect("generates")
    );
}
