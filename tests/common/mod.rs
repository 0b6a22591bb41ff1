//! Helpers for running the built binaries.

#![allow(dead_code)]

use row_generator::CANDIDATE_NAMES;
use std::process::{Command, Output, Stdio};

/// Execute sample-csv with `args` and return the output.
pub fn execute_sample_csv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sample-csv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn sample-csv")
}

/// Execute age-distribution with `stdin` as its input.
pub fn execute_age_distribution(stdin: Stdio) -> Output {
    Command::new(env!("CARGO_BIN_EXE_age-distribution"))
        .stdin(stdin)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn age-distribution")
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Stdout of a successful run, split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is not UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Check a `name,value,email` line against the row invariants.
pub fn assert_valid_row(line: &str) {
    let fields: Vec<&str> = line.split(',').collect();
    assert_eq!(fields.len(), 3, "expected 3 fields in {line:?}");
    assert!(CANDIDATE_NAMES.contains(&fields[0]), "unknown name in {line:?}");
    let value: u32 = fields[1]
        .parse()
        .unwrap_or_else(|e| panic!("bad value in {line:?}: {e}"));
    assert!(value < 100, "value out of range in {line:?}");
    assert_eq!(fields[2], format!("{}@email.com", fields[0]));
}
