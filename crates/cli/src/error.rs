// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the psruprs library.
///
/// Transport variants are tagged by archive so batch warnings name the
/// side that failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] pu_core::Error),

    #[error("config error: {0}\n  hint: psrup reads --config, then $PSRUP_CONFIG, then ~/.config/psrup/config.toml")]
    Config(String),

    #[error("cornell archive (ftp): {0}")]
    Ftp(String),

    #[error("ubc archive (sftp): {0}")]
    Sftp(String),

    #[error("unusable path: {0}")]
    BadPath(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for psruprs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
