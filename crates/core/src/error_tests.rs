// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    unrecognized_backend = { Error::UnrecognizedBackend("CASPSR".into()), "CASPSR" },
    no_ephemeris = { Error::NoEphemeris("ASP".into()), "ASP" },
    not_fits = { Error::NotFits("notes.txt".into()), "notes.txt" },
    missing_keyword = { Error::MissingKeyword("SRC_NAME".into()), "SRC_NAME" },
    mjd_out_of_range = { Error::MjdOutOfRange(99_999_999), "99999999" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_keyword_display() {
    let err = Error::InvalidKeyword {
        keyword: "DATE-OBS".into(),
        reason: "expected a string value".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("DATE-OBS"));
    assert!(msg.contains("expected a string value"));
}

#[test]
fn error_backend_hint_lists_alias() {
    let msg = Error::UnrecognizedBackend("BCPM".into()).to_string();
    assert!(msg.contains("xASP"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
