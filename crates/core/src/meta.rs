// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Observation metadata extraction.
//!
//! Pulls the fields that drive remote-path derivation out of an archive's
//! primary header: source name, recording backend, and the calendar year
//! of the observation.

use std::path::Path;

use crate::backend::Backend;
use crate::epoch;
use crate::error::{Error, Result};
use crate::fits::{self, Header};

/// The header fields the uploader cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Pulsar name as recorded, e.g. `B1855+09` or `J1713+0747`.
    pub source: String,
    pub backend: Backend,
    /// Calendar year the observation started in.
    pub year: i32,
}

impl Metadata {
    /// Reads the metadata from an archive on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_header(&fits::read_header(path)?)
    }

    /// Extracts the metadata from an already-parsed primary header.
    ///
    /// GUPPI and PUPPI record a calendar observation date directly. ASP
    /// records only the start MJD, so the year is derived from it.
    pub fn from_header(header: &Header) -> Result<Self> {
        let backend: Backend = header.text("BACKEND")?.parse()?;
        let source = header.text("SRC_NAME")?.trim().to_string();
        let year = match backend {
            Backend::Guppi | Backend::Puppi => date_year(header.text("DATE-OBS")?)?,
            Backend::Asp => {
                let day = header.integer("STT_IMJD")?;
                let seconds = header.float("STT_SMJD")?;
                epoch::mjd_to_year(day, seconds)?
            }
        };
        Ok(Metadata {
            source,
            backend,
            year,
        })
    }
}

/// Year component of a `YYYY-MM-DD...` observation date.
fn date_year(date: &str) -> Result<i32> {
    date.split('-')
        .next()
        .and_then(|year| year.trim().parse().ok())
        .ok_or_else(|| Error::InvalidKeyword {
            keyword: "DATE-OBS".to_string(),
            reason: format!("no year in '{date}'"),
        })
}

#[cfg(test)]
#[path = "meta_tests.rs"]
mod tests;
