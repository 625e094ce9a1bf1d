// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input file classification.
//!
//! Files named on the command line are classified by content, never by
//! extension: a PSRFITS archive announces itself with the FITS magic card,
//! and a manifest contains at least one `ProfileName:` line. Only the
//! leading 64 KiB are inspected; a manifest whose first `ProfileName:`
//! line falls past that window is treated as unrecognized and skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::manifest;

/// FITS files open with the SIMPLE keyword card.
const FITS_MAGIC: &[u8] = b"SIMPLE  =";

/// How much of a file the classifier inspects.
const SNIFF_LEN: u64 = 64 * 1024;

/// Kinds of input file the uploader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A PSRFITS archive.
    Psrfits,
    /// A colon-delimited metadata manifest.
    Manifest,
    /// Anything else.
    Unknown,
}

/// Classifies an input file by inspecting its leading bytes.
pub fn input_kind(path: &Path) -> Result<InputKind> {
    let mut head = Vec::new();
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;
    Ok(sniff(&head))
}

/// Classifies a leading chunk of file content.
pub fn sniff(head: &[u8]) -> InputKind {
    if head.starts_with(FITS_MAGIC) {
        return InputKind::Psrfits;
    }
    let text = String::from_utf8_lossy(head);
    for line in text.lines() {
        if let Some((key, _)) = manifest::parse_line(line) {
            if key == manifest::MARKER_KEY {
                return InputKind::Manifest;
            }
        }
    }
    InputKind::Unknown
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
