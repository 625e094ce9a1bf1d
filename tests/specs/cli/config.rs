// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration lookup and failure handling.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn missing_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("anything.txt");
    std::fs::write(&input, "x").unwrap();

    psrup()
        .env("PSRUP_CONFIG", "/nonexistent/psrup.toml")
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("hint"));
}

#[test]
fn malformed_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.toml");
    std::fs::write(&bad, "not toml {{{").unwrap();
    let input = temp.path().join("anything.txt");
    std::fs::write(&input, "x").unwrap();

    psrup()
        .arg("--config")
        .arg(&bad)
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn environment_variable_is_read() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.toml");
    std::fs::write(&bad, "not toml {{{").unwrap();
    let input = temp.path().join("anything.txt");
    std::fs::write(&input, "x").unwrap();

    psrup()
        .env("PSRUP_CONFIG", &bad)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn config_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let good = write_config(&temp);
    let input = temp.path().join("anything.txt");
    std::fs::write(&input, "x").unwrap();

    // The environment points nowhere; the flag wins and the run proceeds
    // to planning, which skips the unrecognized input.
    psrup()
        .env("PSRUP_CONFIG", "/nonexistent/psrup.toml")
        .arg("--config")
        .arg(&good)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to upload."));
}
