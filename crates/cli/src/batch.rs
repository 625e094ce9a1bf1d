// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch orchestration across the archive sites.
//!
//! The work list runs as one full pass per store: a session idling while
//! the other site works through large transfers would risk an idle-timeout
//! disconnect, so each session sees its own uninterrupted stream. Every
//! transport error is recorded and the batch moves on; nothing here aborts
//! a run.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::plan::WorkItem;
use crate::store::{RemoteStore, Site, UploadOutcome};

/// One upload attempt: which site, which local file, and how it went.
#[derive(Debug)]
pub struct Attempt {
    pub site: Site,
    pub local: PathBuf,
    pub outcome: Result<UploadOutcome>,
}

/// Everything the batch tried, per (file, site) pair.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempts: Vec<Attempt>,
}

impl BatchReport {
    pub fn uploaded(&self) -> usize {
        self.count(|o| matches!(o, UploadOutcome::Uploaded { .. }))
    }

    pub fn already_present(&self) -> usize {
        self.count(|o| matches!(o, UploadOutcome::AlreadyPresent))
    }

    pub fn mismatched(&self) -> usize {
        self.count(|o| matches!(o, UploadOutcome::SizeMismatch { .. }))
    }

    pub fn failed(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.outcome.is_err())
            .count()
    }

    /// True when `local` reached `site`, either in this run or earlier.
    pub fn stored_at(&self, local: &Path, site: Site) -> bool {
        self.attempts.iter().any(|a| {
            a.site == site
                && a.local.as_path() == local
                && matches!(&a.outcome, Ok(o) if o.is_stored())
        })
    }

    fn count(&self, pred: impl Fn(&UploadOutcome) -> bool) -> usize {
        self.attempts
            .iter()
            .filter(|a| matches!(&a.outcome, Ok(o) if pred(o)))
            .count()
    }
}

/// Runs every work item against every store, companions right after their
/// parent, then deletes companions that every site now holds.
pub fn run_batch(items: &[WorkItem], stores: &mut [Box<dyn RemoteStore>]) -> BatchReport {
    let sites: Vec<Site> = stores.iter().map(|s| s.site()).collect();
    let mut report = BatchReport::default();
    for store in stores.iter_mut() {
        let site = store.site();
        let total = items.len();
        for (index, item) in items.iter().enumerate() {
            let dir = site_dir(item, site);
            println!(
                "[{}/{}] {} -> {}:{}",
                index + 1,
                total,
                item.local.display(),
                site,
                dir
            );
            record(&mut report, store.as_mut(), &item.local, dir);
            if let Some(companion) = &item.companion {
                record(&mut report, store.as_mut(), companion, dir);
            }
        }
    }
    remove_stored_companions(items, &sites, &report);
    report
}

/// Remote directory of `item` on `site`.
fn site_dir(item: &WorkItem, site: Site) -> &str {
    match site {
        Site::Cornell => &item.dirs.cornell,
        Site::Ubc => &item.dirs.ubc,
    }
}

fn attempt(store: &mut dyn RemoteStore, local: &Path, dir: &str) -> Result<UploadOutcome> {
    store.ensure_directory(dir)?;
    store.upload(local, dir)
}

fn record(report: &mut BatchReport, store: &mut dyn RemoteStore, local: &Path, dir: &str) {
    let outcome = attempt(store, local, dir);
    match &outcome {
        Ok(o @ UploadOutcome::SizeMismatch { .. }) => eprintln!(
            "WARNING: {}: {}; remote copy left in place",
            local.display(),
            o
        ),
        Ok(o) => println!("  {}: {}", local.display(), o),
        Err(e) => eprintln!("WARNING: {}: {}", local.display(), e),
    }
    report.attempts.push(Attempt {
        site: store.site(),
        local: local.to_path_buf(),
        outcome,
    });
}

/// Deletes companion files that every site now holds. A companion held
/// back by any failure stays on disk for a re-run.
fn remove_stored_companions(items: &[WorkItem], sites: &[Site], report: &BatchReport) {
    for item in items {
        let Some(companion) = &item.companion else {
            continue;
        };
        let everywhere =
            !sites.is_empty() && sites.iter().all(|&site| report.stored_at(companion, site));
        if !everywhere {
            continue;
        }
        match std::fs::remove_file(companion) {
            Ok(()) => println!("Removed {}", companion.display()),
            Err(e) => eprintln!("WARNING: could not remove {}: {}", companion.display(), e),
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
