// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote archive stores.
//!
//! Both archives expose one idempotent contract through [`RemoteStore`]:
//! recursive directory creation, existence-checked upload with byte-length
//! verification, and plain download. Transport differences (FTPS control
//! channel vs SSH session) stay inside the two implementations.
//!
//! Existence is checked by listed name only. A stale remote entry with the
//! right name counts as already synchronized; no content comparison is
//! performed at any point.

mod ftp;
mod sftp;

pub use ftp::FtpStore;
pub use sftp::SftpStore;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The two archive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Cornell,
    Ubc,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Cornell => "cornell",
            Site::Ubc => "ubc",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one upload attempt finished with the session still intact.
/// Transport failures are the `Err` branch of [`RemoteStore::upload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Transferred, and the remote byte length matches the local one.
    Uploaded { bytes: u64 },
    /// A same-named entry is already listed remotely; nothing was sent.
    AlreadyPresent,
    /// Transferred, but the remote byte length disagrees. The remote copy
    /// stays in place; a re-run will skip it by name.
    SizeMismatch { local: u64, remote: u64 },
}

impl UploadOutcome {
    /// True when the remote side holds a copy this run is willing to trust
    /// for cleanup decisions.
    pub fn is_stored(&self) -> bool {
        matches!(
            self,
            UploadOutcome::Uploaded { .. } | UploadOutcome::AlreadyPresent
        )
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Uploaded { bytes } => write!(f, "uploaded ({} bytes)", bytes),
            UploadOutcome::AlreadyPresent => write!(f, "already present, skipped"),
            UploadOutcome::SizeMismatch { local, remote } => write!(
                f,
                "size mismatch (local {} bytes, remote {} bytes)",
                local, remote
            ),
        }
    }
}

/// One remote archive endpoint. Implementations hold exactly one live
/// session; every operation blocks.
pub trait RemoteStore {
    /// Which archive this store talks to.
    fn site(&self) -> Site;

    /// Creates every missing segment of `path`, never failing because a
    /// segment already exists. On return the session is positioned at the
    /// connection root again, on the error path too.
    fn ensure_directory(&mut self, path: &str) -> Result<()>;

    /// Uploads `local` into `remote_dir` unless a same-named entry is
    /// already listed there. Verification compares byte lengths only.
    fn upload(&mut self, local: &Path, remote_dir: &str) -> Result<UploadOutcome>;

    /// Downloads `remote_path` into `local_dir`, named after its base
    /// name. Downloads overwrite; there is no existence check this way.
    fn download(&mut self, remote_path: &str, local_dir: &Path) -> Result<PathBuf>;

    /// Ends the session. Call once, at end of life.
    fn close(&mut self) -> Result<()>;
}

/// Base name of a remote path. Servers answer listings with either bare
/// names or full paths; comparisons always use the last component.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// True when a directory listing contains `name`, comparing base names.
pub(crate) fn listing_has(listing: &[String], name: &str) -> bool {
    listing.iter().any(|entry| base_name(entry) == name)
}

/// UTF-8 base name of a local file.
pub(crate) fn local_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::BadPath(path.display().to_string()))
}

/// Joins a remote directory and a file name with exactly one slash.
pub(crate) fn remote_join(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name)
}

#[cfg(test)]
pub(crate) mod test_store;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
