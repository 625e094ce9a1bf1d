// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! UBC archive store: SFTP over an SSH session.
//!
//! Every call addresses an absolute path, so unlike the FTP side there is
//! no working directory to restore after a walk.

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::{Path, PathBuf};

use ssh2::{Session, Sftp};

use crate::config::SftpEndpoint;
use crate::error::{Error, Result};
use crate::store::{base_name, local_name, remote_join, RemoteStore, Site, UploadOutcome};

/// SFTP session against the UBC archive.
pub struct SftpStore {
    session: Session,
    sftp: Sftp,
}

impl SftpStore {
    /// Connects and authenticates, trying the configured key before the
    /// configured password.
    pub fn connect(endpoint: &SftpEndpoint) -> Result<SftpStore> {
        let addr = format!("{}:{}", endpoint.host, endpoint.port);
        tracing::debug!("connecting to sftp {}", addr);
        let tcp = TcpStream::connect(&addr)
            .map_err(|e| Error::Sftp(format!("connect {}: {}", addr, e)))?;
        let mut session =
            Session::new().map_err(|e| Error::Sftp(format!("session setup: {}", e)))?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| Error::Sftp(format!("handshake with {}: {}", addr, e)))?;

        let mut refusals = Vec::new();
        if let Some(key) = &endpoint.key_file {
            if let Err(e) = session.userauth_pubkey_file(&endpoint.user, None, key, None) {
                refusals.push(format!("key {}: {}", key.display(), e));
            }
        }
        if !session.authenticated() {
            if let Some(password) = &endpoint.password {
                if let Err(e) = session.userauth_password(&endpoint.user, password) {
                    refusals.push(format!("password: {}", e));
                }
            }
        }
        if !session.authenticated() {
            let detail = if refusals.is_empty() {
                "no credentials configured".to_string()
            } else {
                refusals.join("; ")
            };
            return Err(Error::Sftp(format!(
                "authentication as {} failed: {}",
                endpoint.user, detail
            )));
        }

        let sftp = session
            .sftp()
            .map_err(|e| Error::Sftp(format!("open sftp channel: {}", e)))?;
        Ok(SftpStore { session, sftp })
    }
}

/// Every cumulative prefix of `path`, one per segment, leading slash kept.
fn prefixes(path: &str) -> Vec<String> {
    let mut walked = String::new();
    if path.starts_with('/') {
        walked.push('/');
    }
    let mut out = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !walked.is_empty() && !walked.ends_with('/') {
            walked.push('/');
        }
        walked.push_str(segment);
        out.push(walked.clone());
    }
    out
}

impl RemoteStore for SftpStore {
    fn site(&self) -> Site {
        Site::Ubc
    }

    fn ensure_directory(&mut self, path: &str) -> Result<()> {
        for dir in prefixes(path) {
            match self.sftp.mkdir(Path::new(&dir), 0o755) {
                Ok(()) => tracing::debug!("mkdir {}", dir),
                // mkdir reports "already exists" and real failures the same
                // way; only a path that still does not stat is a failure.
                Err(e) => {
                    if self.sftp.stat(Path::new(&dir)).is_err() {
                        return Err(Error::Sftp(format!("mkdir {}: {}", dir, e)));
                    }
                }
            }
        }
        Ok(())
    }

    fn upload(&mut self, local: &Path, remote_dir: &str) -> Result<UploadOutcome> {
        let name = local_name(local)?;
        let entries = self
            .sftp
            .readdir(Path::new(remote_dir))
            .map_err(|e| Error::Sftp(format!("list {}: {}", remote_dir, e)))?;
        let present = entries
            .iter()
            .any(|(path, _)| path.file_name().and_then(|n| n.to_str()) == Some(name));
        if present {
            return Ok(UploadOutcome::AlreadyPresent);
        }
        let remote_path = remote_join(remote_dir, name);
        let mut local_file = File::open(local)?;
        tracing::debug!("create {}", remote_path);
        let mut remote_file = self
            .sftp
            .create(Path::new(&remote_path))
            .map_err(|e| Error::Sftp(format!("create {}: {}", remote_path, e)))?;
        let bytes = io::copy(&mut local_file, &mut remote_file)
            .map_err(|e| Error::Sftp(format!("write {}: {}", remote_path, e)))?;
        drop(remote_file);
        let local_len = local.metadata()?.len();
        let stat = self
            .sftp
            .stat(Path::new(&remote_path))
            .map_err(|e| Error::Sftp(format!("stat {}: {}", remote_path, e)))?;
        let remote_len = stat.size.unwrap_or(0);
        if remote_len == local_len {
            Ok(UploadOutcome::Uploaded { bytes })
        } else {
            Ok(UploadOutcome::SizeMismatch {
                local: local_len,
                remote: remote_len,
            })
        }
    }

    fn download(&mut self, remote_path: &str, local_dir: &Path) -> Result<PathBuf> {
        let target = local_dir.join(base_name(remote_path));
        let mut remote_file = self
            .sftp
            .open(Path::new(remote_path))
            .map_err(|e| Error::Sftp(format!("open {}: {}", remote_path, e)))?;
        let mut local_file = File::create(&target)?;
        io::copy(&mut remote_file, &mut local_file)
            .map_err(|e| Error::Sftp(format!("read {}: {}", remote_path, e)))?;
        Ok(target)
    }

    fn close(&mut self) -> Result<()> {
        self.session
            .disconnect(None, "done", None)
            .map_err(|e| Error::Sftp(format!("disconnect: {}", e)))
    }
}

#[cfg(test)]
#[path = "sftp_tests.rs"]
mod tests;
