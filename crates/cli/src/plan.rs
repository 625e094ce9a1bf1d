// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upload planning: turns command-line inputs into an ordered work list.
//!
//! Data files resolve to a `rawdata` directory and get an ephemeris
//! companion where the backend provides one. Manifests resolve to a
//! `processed` directory for every profile they list, followed by the
//! manifest file itself. Anything unreadable or unrecognized is warned
//! about and skipped; planning never aborts the batch.

use std::path::{Path, PathBuf};

use pu_core::remote_path::{derive, Category, RemoteDirs};
use pu_core::{detect, ephemeris, manifest, EntryKind, InputKind, Metadata};

/// One file to upload: the remote directory per site, plus an optional
/// ephemeris companion that travels to the same directories.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub local: PathBuf,
    pub dirs: RemoteDirs,
    pub companion: Option<PathBuf>,
}

/// Builds the ordered work list for the given inputs.
pub fn build(files: &[PathBuf], test_area: bool) -> Vec<WorkItem> {
    let mut items = Vec::new();
    for file in files {
        match detect::input_kind(file) {
            Ok(InputKind::Psrfits) => items.extend(data_item(file, test_area)),
            Ok(InputKind::Manifest) => items.extend(manifest_items(file, test_area)),
            Ok(InputKind::Unknown) => {
                eprintln!(
                    "WARNING: {}: not a PSRFITS file or a processing manifest; skipped",
                    file.display()
                );
            }
            Err(e) => eprintln!("WARNING: {}: {}", file.display(), e),
        }
    }
    items
}

/// A raw observation: derive its archive directories from the header and
/// write the ephemeris companion beside it.
fn data_item(file: &Path, test_area: bool) -> Option<WorkItem> {
    let meta = match Metadata::from_file(file) {
        Ok(meta) => meta,
        Err(e) => {
            eprintln!("WARNING: {}: {}", file.display(), e);
            return None;
        }
    };
    let dirs = derive(&meta, Category::Rawdata, test_area);
    let companion = match ephemeris::export(file, meta.backend) {
        Ok(par) => {
            println!("Wrote ephemeris {}", par.display());
            Some(par)
        }
        Err(e) => {
            eprintln!(
                "WARNING: {}: {}; uploading without a companion",
                file.display(),
                e
            );
            None
        }
    };
    Some(WorkItem {
        local: file.to_path_buf(),
        dirs,
        companion,
    })
}

/// A processing manifest: one item per listed profile, resolved relative
/// to the manifest's own directory, then the manifest itself in the
/// directory of the first profile that resolved.
fn manifest_items(file: &Path, test_area: bool) -> Vec<WorkItem> {
    let entries = match manifest::read(file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("WARNING: {}: {}", file.display(), e);
            return Vec::new();
        }
    };
    let base = file.parent().unwrap_or(Path::new("."));
    let mut items = Vec::new();
    let mut manifest_dirs: Option<RemoteDirs> = None;
    for entry in &entries {
        if entry.kind() == EntryKind::Toa {
            // Measurement records travel inside the manifest itself.
            continue;
        }
        let Some(name) = entry.profile_name() else {
            eprintln!(
                "WARNING: {}: entry without a profile name; skipped",
                file.display()
            );
            continue;
        };
        let local = base.join(name);
        let meta = match Metadata::from_file(&local) {
            Ok(meta) => meta,
            Err(e) => {
                eprintln!("WARNING: {}: {}", local.display(), e);
                continue;
            }
        };
        let dirs = derive(&meta, Category::Processed, test_area);
        if manifest_dirs.is_none() {
            manifest_dirs = Some(dirs.clone());
        }
        items.push(WorkItem {
            local,
            dirs,
            companion: None,
        });
    }
    match manifest_dirs {
        Some(dirs) => items.push(WorkItem {
            local: file.to_path_buf(),
            dirs,
            companion: None,
        }),
        None => eprintln!(
            "WARNING: {}: no listed file could be resolved; manifest not uploaded",
            file.display()
        ),
    }
    items
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
