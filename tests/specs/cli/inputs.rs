// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input handling: classification, skip-and-warn, and fatal setup errors.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn unrecognized_file_is_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);
    let stray = temp.path().join("notes.txt");
    std::fs::write(&stray, "just some text\n").unwrap();

    psrup()
        .arg("--config")
        .arg(&config)
        .arg(&stray)
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to upload."))
        .stderr(predicate::str::contains("skipped"));
}

#[test]
fn missing_file_is_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);

    psrup()
        .arg("--config")
        .arg(&config)
        .arg("/nonexistent/obs.fits")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to upload."))
        .stderr(predicate::str::contains("WARNING"));
}

#[test]
fn manifest_without_resolvable_profiles_is_skipped() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);
    let listing = temp.path().join("run.meta");
    std::fs::write(&listing, "ProfileName: missing.prof\n").unwrap();

    psrup()
        .arg("--config")
        .arg(&config)
        .arg(&listing)
        .assert()
        .success()
        .stdout(predicate::str::contains("No files to upload."))
        .stderr(predicate::str::contains("manifest not uploaded"));
}

#[test]
fn connection_refusal_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);
    let obs = temp.path().join("obs.fits");
    write_guppi(&obs, "B1855+09");

    psrup()
        .arg("--config")
        .arg(&config)
        .arg(&obs)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cornell archive (ftp)"));
}

#[test]
fn mixed_inputs_warn_per_file() {
    let temp = TempDir::new().unwrap();
    let config = write_config(&temp);
    let stray = temp.path().join("a.txt");
    let missing = temp.path().join("gone.fits");
    std::fs::write(&stray, "nope\n").unwrap();

    psrup()
        .arg("--config")
        .arg(&config)
        .arg(&stray)
        .arg(&missing)
        .assert()
        .success()
        .stderr(predicate::str::contains("a.txt"))
        .stderr(predicate::str::contains("gone.fits"));
}
