// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_config_display() {
    let err = Error::Config("missing field".to_string());
    assert!(err.to_string().contains("config error"));
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn test_error_config_hints_at_lookup_order() {
    let msg = Error::Config("no such file".to_string()).to_string();
    assert!(msg.contains("hint"));
    assert!(msg.contains("PSRUP_CONFIG"));
    assert!(msg.contains("~/.config/psrup/config.toml"));
}

#[test]
fn test_error_ftp_names_the_site() {
    let err = Error::Ftp("login refused".to_string());
    assert!(err.to_string().contains("cornell"));
    assert!(err.to_string().contains("login refused"));
}

#[test]
fn test_error_sftp_names_the_site() {
    let err = Error::Sftp("handshake failed".to_string());
    assert!(err.to_string().contains("ubc"));
    assert!(err.to_string().contains("handshake failed"));
}

#[test]
fn test_error_from_core() {
    let err: Error = pu_core::Error::UnrecognizedBackend("MOCK".to_string()).into();
    assert!(err.to_string().contains("MOCK"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
}
