// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pu-core operations.

use thiserror::Error;

/// All possible errors that can occur in pu-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized backend: '{0}'\n  hint: supported backends are: GUPPI, PUPPI, ASP, xASP")]
    UnrecognizedBackend(String),

    #[error("no ephemeris table in {0} data")]
    NoEphemeris(String),

    #[error("not a FITS file: {0}")]
    NotFits(String),

    #[error("corrupted FITS data: {0}")]
    CorruptedFits(String),

    #[error("missing header keyword: {0}")]
    MissingKeyword(String),

    #[error("header keyword {keyword}: {reason}")]
    InvalidKeyword { keyword: String, reason: String },

    #[error("day {0} is outside the calendar range")]
    MjdOutOfRange(i64),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for pu-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
