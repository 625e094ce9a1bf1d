// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording backends supported by the uploader.
//!
//! The backend named in an archive's primary header decides both the remote
//! directory convention and whether the file carries an embedded ephemeris
//! table.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Instrument that recorded a fold-mode archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Green Bank coherent-dedispersion backend (PSRFITS).
    Guppi,
    /// Arecibo coherent-dedispersion backend (PSRFITS).
    Puppi,
    /// Arecibo-Berkeley incoherent backend. Headers label it `xASP`.
    Asp,
}

impl Backend {
    /// Returns the canonical name used in remote paths and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Guppi => "GUPPI",
            Backend::Puppi => "PUPPI",
            Backend::Asp => "ASP",
        }
    }

    /// True for backends whose archives embed an ephemeris table.
    ///
    /// ASP archives carry no ephemeris extension, so no companion
    /// parameter file can be produced for them.
    pub fn has_ephemeris(&self) -> bool {
        matches!(self, Backend::Guppi | Backend::Puppi)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GUPPI" => Ok(Backend::Guppi),
            "PUPPI" => Ok(Backend::Puppi),
            // xASP is the incoherent-mode alias seen in real headers.
            "ASP" | "XASP" => Ok(Backend::Asp),
            _ => Err(Error::UnrecognizedBackend(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
