// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn psrup() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("psrup").unwrap()
}

/// Writes a config pointing both endpoints at a port nothing listens on.
///
/// Good enough for every pre-connection code path; a run that reaches the
/// network fails fast with a connection error.
pub fn write_config(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "[cornell]\n\
         host = \"127.0.0.1\"\n\
         port = 1\n\
         user = \"u\"\n\
         password = \"p\"\n\
         \n\
         [ubc]\n\
         host = \"127.0.0.1\"\n\
         port = 1\n\
         user = \"u\"\n\
         password = \"p\"\n",
    )
    .unwrap();
    path
}

/// Writes a minimal header-only GUPPI archive.
pub fn write_guppi(path: &Path, source: &str) {
    let src_card = format!("SRC_NAME= '{}'", source);
    let cards = vec![
        "SIMPLE  =                    T",
        "BITPIX  =                    8",
        "NAXIS   =                    0",
        "BACKEND = 'GUPPI   '",
        src_card.as_str(),
        "DATE-OBS= '2011-02-12T00:00:00'",
    ];
    let mut bytes = Vec::new();
    for text in &cards {
        let mut card = text.as_bytes().to_vec();
        card.resize(80, b' ');
        bytes.extend(&card);
    }
    bytes.extend(b"END");
    while bytes.len() % 2880 != 0 {
        bytes.push(b' ');
    }
    std::fs::write(path, &bytes).unwrap();
}
