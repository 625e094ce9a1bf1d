// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store for exercising upload and batch logic without a network.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};

use super::{base_name, listing_has, local_name, RemoteStore, Site, UploadOutcome};

/// Everything a [`MockStore`] was asked to do, in order.
#[derive(Debug, Default)]
pub(crate) struct StoreLog {
    /// Directory paths passed to `ensure_directory`.
    pub ensured: Vec<String>,
    /// Remote listing: directory path to the file names it holds.
    pub dirs: BTreeMap<String, Vec<String>>,
    /// Local paths passed to `upload`, including ones that failed.
    pub attempted: Vec<PathBuf>,
    /// Uploads that actually moved bytes.
    pub transfers: usize,
    /// Times the session was closed.
    pub closed: usize,
}

pub(crate) struct MockStore {
    site: Site,
    log: Rc<RefCell<StoreLog>>,
    fail_names: Vec<String>,
    mismatch_names: Vec<String>,
    fail_close: bool,
}

impl MockStore {
    pub(crate) fn new(site: Site) -> (Self, Rc<RefCell<StoreLog>>) {
        let log = Rc::new(RefCell::new(StoreLog::default()));
        let store = MockStore {
            site,
            log: Rc::clone(&log),
            fail_names: Vec::new(),
            mismatch_names: Vec::new(),
            fail_close: false,
        };
        (store, log)
    }

    /// Every upload of a file with this base name fails with a transport error.
    pub(crate) fn failing_on(mut self, name: &str) -> Self {
        self.fail_names.push(name.to_string());
        self
    }

    /// Uploads of this base name transfer but report a short remote copy.
    pub(crate) fn mismatching_on(mut self, name: &str) -> Self {
        self.mismatch_names.push(name.to_string());
        self
    }

    /// The session refuses to say goodbye.
    pub(crate) fn failing_on_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    fn transport_error(&self, message: String) -> Error {
        match self.site {
            Site::Cornell => Error::Ftp(message),
            Site::Ubc => Error::Sftp(message),
        }
    }
}

impl RemoteStore for MockStore {
    fn site(&self) -> Site {
        self.site
    }

    fn ensure_directory(&mut self, path: &str) -> Result<()> {
        let mut log = self.log.borrow_mut();
        log.ensured.push(path.to_string());
        log.dirs.entry(path.to_string()).or_default();
        Ok(())
    }

    fn upload(&mut self, local: &Path, remote_dir: &str) -> Result<UploadOutcome> {
        let name = local_name(local)?.to_string();
        let mut log = self.log.borrow_mut();
        log.attempted.push(local.to_path_buf());
        if self.fail_names.iter().any(|n| n == &name) {
            return Err(self.transport_error(format!("refused {}", name)));
        }
        let present = log
            .dirs
            .get(remote_dir)
            .is_some_and(|names| listing_has(names, &name));
        if present {
            return Ok(UploadOutcome::AlreadyPresent);
        }
        let mismatch = self.mismatch_names.iter().any(|n| n == &name);
        log.dirs.entry(remote_dir.to_string()).or_default().push(name);
        log.transfers += 1;
        let bytes = local.metadata().map(|m| m.len()).unwrap_or(0);
        if mismatch {
            // The bad copy still lands in the listing, as on a real site.
            return Ok(UploadOutcome::SizeMismatch {
                local: bytes,
                remote: bytes / 2,
            });
        }
        Ok(UploadOutcome::Uploaded { bytes })
    }

    fn download(&mut self, remote_path: &str, local_dir: &Path) -> Result<PathBuf> {
        let target = local_dir.join(base_name(remote_path));
        std::fs::write(&target, b"")?;
        Ok(target)
    }

    fn close(&mut self) -> Result<()> {
        self.log.borrow_mut().closed += 1;
        if self.fail_close {
            return Err(self.transport_error("goodbye refused".to_string()));
        }
        Ok(())
    }
}
