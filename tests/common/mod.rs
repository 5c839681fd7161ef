//! Shared utilities for integration tests.
//!
//! Helpers for locating fixtures and running the `pdb-elements` binary, plus a
//! recursive YAML comparator that reports all mismatches with their dotted path.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_yaml::Value;

/// Path to the compiled `pdb-elements` binary.
pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pdb-elements"))
}

/// Path to a file under `tests/files`, independent of the working directory.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/files")
        .join(name)
}

/// Run the binary with the given arguments and a quiet logger.
pub fn run(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to execute pdb-elements binary")
}

/// Run the binary, assert success and parse standard output as YAML.
pub fn run_yaml(args: &[&str]) -> Value {
    let output = run(args);
    assert!(
        output.status.success(),
        "pdb-elements exited with status {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_yaml::from_slice(&output.stdout).expect("failed to parse YAML output")
}

/// Assert that two YAML values match, panicking with all diffs on failure.
pub fn assert_yaml_eq(expected: &Value, actual: &Value, float_tolerance: f64) {
    let mut diffs = Vec::new();
    compare_recursive(expected, actual, "", float_tolerance, &mut diffs);
    if !diffs.is_empty() {
        let report = diffs
            .iter()
            .enumerate()
            .map(|(i, d)| format!("  {}. {}", i + 1, d))
            .collect::<Vec<_>>()
            .join("\n");
        panic!(
            "YAML comparison found {} difference(s):\n{}",
            diffs.len(),
            report
        );
    }
}

fn compare_recursive(
    expected: &Value,
    actual: &Value,
    path: &str,
    tol: f64,
    diffs: &mut Vec<String>,
) {
    match (expected, actual) {
        (Value::Null, Value::Null) => {}
        (Value::Bool(a), Value::Bool(b)) => {
            if a != b {
                diffs.push(format!("{path}: bool mismatch: expected {a}, got {b}"));
            }
        }
        (Value::String(a), Value::String(b)) => {
            if a != b {
                diffs.push(format!(
                    "{path}: string mismatch: expected \"{a}\", got \"{b}\""
                ));
            }
        }
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b, path, tol, diffs),
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                diffs.push(format!(
                    "{path}: sequence length mismatch: expected {}, got {}",
                    a.len(),
                    b.len()
                ));
            } else {
                for (i, (ea, eb)) in a.iter().zip(b.iter()).enumerate() {
                    compare_recursive(ea, eb, &format!("{path}[{i}]"), tol, diffs);
                }
            }
        }
        (Value::Mapping(a), Value::Mapping(b)) => {
            for (key, ea) in a {
                let child = child_path(path, key);
                match b.get(key) {
                    Some(eb) => compare_recursive(ea, eb, &child, tol, diffs),
                    None => diffs.push(format!("{child}: missing in actual")),
                }
            }
            for key in b.keys().filter(|key| !a.contains_key(*key)) {
                diffs.push(format!("{}: unexpected key", child_path(path, key)));
            }
        }
        _ => diffs.push(format!(
            "{path}: type mismatch: expected {expected:?}, got {actual:?}"
        )),
    }
}

fn compare_numbers(
    a: &serde_yaml::Number,
    b: &serde_yaml::Number,
    path: &str,
    tol: f64,
    diffs: &mut Vec<String>,
) {
    match (a.as_i64(), b.as_i64()) {
        (Some(ai), Some(bi)) => {
            if ai != bi {
                diffs.push(format!("{path}: integer mismatch: expected {ai}, got {bi}"));
            }
        }
        _ => {
            let af = a.as_f64().unwrap_or(f64::NAN);
            let bf = b.as_f64().unwrap_or(f64::NAN);
            if !((af - bf).abs() <= tol) {
                diffs.push(format!(
                    "{path}: float mismatch: expected {af}, got {bf} (tol = {tol})"
                ));
            }
        }
    }
}

fn child_path(parent: &str, key: &Value) -> String {
    let key = match key {
        Value::String(s) => s.clone(),
        other => format!("{other:?}"),
    };
    if parent.is_empty() {
        key
    } else {
        format!("{parent}.{key}")
    }
}
