// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ephemeris companion files.
//!
//! GUPPI and PUPPI archives carry the pulsar ephemeris used at observation
//! time in their first table extension. The exporter rewrites that row as
//! a tempo-style parameter file, uploaded alongside the archive so the
//! timing pipeline can fold against the same model.

use std::path::{Path, PathBuf};

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::fits::{self, Table, Value};

/// Companion file name: the archive name with its extension replaced.
pub fn par_name(archive: &Path) -> PathBuf {
    archive.with_extension("par")
}

/// Extracts the ephemeris from an archive and writes the companion file
/// next to it, returning the companion's path.
///
/// ASP archives carry no ephemeris table; asking for one fails before any
/// file access.
pub fn export(archive: &Path, backend: Backend) -> Result<PathBuf> {
    if !backend.has_ephemeris() {
        return Err(Error::NoEphemeris(backend.to_string()));
    }
    let table = fits::read_first_table(archive)?;
    let out = par_name(archive);
    std::fs::write(&out, render(&table))?;
    Ok(out)
}

/// Renders an ephemeris row as parameter lines.
///
/// One line per parameter in native column order: the name left-justified
/// in a 10-column field, the value right-justified in an 18-column field.
/// Parameters whose value is zero or an empty string are omitted.
pub fn render(table: &Table) -> String {
    let mut out = String::new();
    for (name, value) in &table.fields {
        if omitted(value) {
            continue;
        }
        let rendered = value.to_string();
        out.push_str(&format!("{name:<10}{rendered:>18}\n"));
    }
    out
}

fn omitted(value: &Value) -> bool {
    match value {
        Value::Integer(n) => *n == 0,
        Value::Float(x) => *x == 0.0,
        Value::Text(s) => s.is_empty(),
    }
}

#[cfg(test)]
#[path = "ephemeris_tests.rs"]
mod tests;
