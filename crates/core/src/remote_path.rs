// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote directory derivation.
//!
//! The two archive sites use different layouts for the same observation.
//! Cornell files by source, backend, and year under the project root; UBC
//! files by catalog-stripped source and lowercased backend under its data
//! store. A configurable staging area routes everything beneath a `Test`
//! directory instead.

use crate::meta::Metadata;

/// Top-level namespace on the Cornell FTP server.
pub const CORNELL_ROOT: &str = "NANOGrav";

/// Top-level namespace on the UBC data archive.
pub const UBC_ROOT: &str = "/dstore/data";

/// Directory leaf that separates raw products from pipeline products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Archives named directly on the command line.
    Rawdata,
    /// Archives referenced by a manifest, plus the manifest itself.
    Processed,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rawdata => "rawdata",
            Category::Processed => "processed",
        }
    }
}

/// The destination directory on each site for one local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDirs {
    pub cornell: String,
    pub ubc: String,
}

/// Derives both sites' destination directories from observation metadata.
pub fn derive(meta: &Metadata, category: Category, test_area: bool) -> RemoteDirs {
    RemoteDirs {
        cornell: cornell_dir(meta, category, test_area),
        ubc: ubc_dir(meta, test_area),
    }
}

/// `NANOGrav/<source>/<BACKEND>/<year>/<category>`, relative to the FTP
/// root.
pub fn cornell_dir(meta: &Metadata, category: Category, test_area: bool) -> String {
    let tail = format!(
        "{}/{}/{}/{}",
        meta.source,
        meta.backend.as_str(),
        meta.year,
        category.as_str()
    );
    if test_area {
        format!("{CORNELL_ROOT}/Test/{tail}")
    } else {
        format!("{CORNELL_ROOT}/{tail}")
    }
}

/// `/dstore/data/<stripped source>/<backend>` with the backend lowercased.
///
/// The survey prefix letters B and J are stripped from both ends of the
/// source name, matching the archive's historical layout.
pub fn ubc_dir(meta: &Metadata, test_area: bool) -> String {
    let source = meta.source.trim_matches('B').trim_matches('J');
    let backend = meta.backend.as_str().to_ascii_lowercase();
    if test_area {
        format!("{UBC_ROOT}/Test/{source}/{backend}")
    } else {
        format!("{UBC_ROOT}/{source}/{backend}")
    }
}

#[cfg(test)]
#[path = "remote_path_tests.rs"]
mod tests;
