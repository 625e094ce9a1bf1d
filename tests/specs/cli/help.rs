// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Usage and help surface.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    psrup()
        .assert()
        .success()
        .stdout(predicate::str::contains("psrup"))
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("FILES"));
}

#[test]
fn help_flags_print_usage_on_stdout() {
    psrup()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--config"));

    psrup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("PSRUP_CONFIG"));
}

#[test]
fn help_names_the_recognized_inputs() {
    psrup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PSRFITS"))
        .stdout(predicate::str::contains("manifest"));
}

#[test]
fn version_flag_prints_version() {
    psrup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("psrup"));
}
