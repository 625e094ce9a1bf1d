// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exit-code contract for the command-line surface: usage is free, bad
//! flags are not.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn psrup() -> Command {
    cargo_bin_cmd!("psrup")
}

#[test]
fn no_arguments_prints_usage_and_exits_zero() {
    psrup()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn short_help_exits_zero() {
    psrup().arg("-h").assert().success();
}

#[test]
fn long_help_exits_zero() {
    psrup().arg("--help").assert().success();
}

#[test]
fn unknown_flag_exits_one() {
    psrup()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_beats_valid_files() {
    psrup()
        .arg("--frobnicate")
        .arg("obs.fits")
        .assert()
        .failure()
        .code(1);
}
