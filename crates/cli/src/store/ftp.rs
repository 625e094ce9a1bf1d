// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cornell archive store: FTP with an explicit TLS control channel.
//!
//! Directory creation walks segments from the root with NLST/MKD/CWD, the
//! way the server's virtual tree expects, so the session must be returned
//! to `/` after every walk. The walk, skip, and verification logic sits
//! above the [`FtpVerbs`] seam and runs the same against the real control
//! channel and against a scripted session in tests.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use suppaftp::native_tls::TlsConnector;
use suppaftp::types::FileType;
use suppaftp::{Mode, NativeTlsConnector, NativeTlsFtpStream};

use crate::config::FtpEndpoint;
use crate::error::{Error, Result};
use crate::store::{
    base_name, listing_has, local_name, remote_join, RemoteStore, Site, UploadOutcome,
};

/// The raw verbs the store drives an FTP session with.
pub trait FtpVerbs {
    /// Names listed in `dir`, or in the working directory for `None`.
    fn list(&mut self, dir: Option<&str>) -> Result<Vec<String>>;
    fn make_dir(&mut self, name: &str) -> Result<()>;
    fn change_dir(&mut self, dir: &str) -> Result<()>;
    fn set_binary(&mut self) -> Result<()>;
    /// Stores `local` at `remote_path`, returning the bytes written.
    fn store(&mut self, remote_path: &str, local: &Path) -> Result<u64>;
    fn size_of(&mut self, remote_path: &str) -> Result<u64>;
    fn retrieve(&mut self, remote_path: &str, target: &Path) -> Result<()>;
    fn quit(&mut self) -> Result<()>;
}

impl FtpVerbs for NativeTlsFtpStream {
    fn list(&mut self, dir: Option<&str>) -> Result<Vec<String>> {
        self.nlst(dir)
            .map_err(|e| Error::Ftp(format!("list {}: {}", dir.unwrap_or("."), e)))
    }

    fn make_dir(&mut self, name: &str) -> Result<()> {
        self.mkdir(name)
            .map_err(|e| Error::Ftp(format!("mkdir {}: {}", name, e)))
    }

    fn change_dir(&mut self, dir: &str) -> Result<()> {
        self.cwd(dir)
            .map_err(|e| Error::Ftp(format!("cwd {}: {}", dir, e)))
    }

    fn set_binary(&mut self) -> Result<()> {
        self.transfer_type(FileType::Binary)
            .map_err(|e| Error::Ftp(format!("binary mode: {}", e)))
    }

    fn store(&mut self, remote_path: &str, local: &Path) -> Result<u64> {
        let mut file = File::open(local)?;
        self.put_file(remote_path, &mut file)
            .map_err(|e| Error::Ftp(format!("store {}: {}", remote_path, e)))
    }

    fn size_of(&mut self, remote_path: &str) -> Result<u64> {
        let size = self
            .size(remote_path)
            .map_err(|e| Error::Ftp(format!("size {}: {}", remote_path, e)))?;
        Ok(size as u64)
    }

    fn retrieve(&mut self, remote_path: &str, target: &Path) -> Result<()> {
        let mut data = self
            .retr_as_stream(remote_path)
            .map_err(|e| Error::Ftp(format!("retrieve {}: {}", remote_path, e)))?;
        let mut file = File::create(target)?;
        io::copy(&mut data, &mut file)?;
        self.finalize_retr_stream(data)
            .map_err(|e| Error::Ftp(format!("finalize {}: {}", remote_path, e)))
    }

    fn quit(&mut self) -> Result<()> {
        NativeTlsFtpStream::quit(self).map_err(|e| Error::Ftp(format!("quit: {}", e)))
    }
}

/// FTPS session against the Cornell archive.
pub struct FtpStore<S: FtpVerbs = NativeTlsFtpStream> {
    session: S,
}

impl FtpStore<NativeTlsFtpStream> {
    /// Connects, upgrades the control channel to TLS, and logs in.
    pub fn connect(endpoint: &FtpEndpoint) -> Result<Self> {
        let addr = format!("{}:{}", endpoint.host, endpoint.port);
        tracing::debug!("connecting to ftp {}", addr);
        let plain = NativeTlsFtpStream::connect(&addr)
            .map_err(|e| Error::Ftp(format!("connect {}: {}", addr, e)))?;
        let tls = TlsConnector::new().map_err(|e| Error::Ftp(format!("tls setup: {}", e)))?;
        let mut stream = plain
            .into_secure(NativeTlsConnector::from(tls), &endpoint.host)
            .map_err(|e| Error::Ftp(format!("tls handshake with {}: {}", endpoint.host, e)))?;
        stream
            .login(&endpoint.user, &endpoint.password)
            .map_err(|e| Error::Ftp(format!("login as {}: {}", endpoint.user, e)))?;
        stream.set_mode(Mode::Passive);
        Ok(FtpStore { session: stream })
    }
}

impl<S: FtpVerbs> FtpStore<S> {
    #[cfg(test)]
    pub(crate) fn over(session: S) -> Self {
        FtpStore { session }
    }

    /// Walks `path` from the current location, creating and entering each
    /// segment in turn.
    fn descend(&mut self, path: &str) -> Result<()> {
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let listing = self.session.list(None)?;
            if !listing_has(&listing, segment) {
                tracing::debug!("MKD {}", segment);
                self.session.make_dir(segment)?;
            }
            self.session.change_dir(segment)?;
        }
        Ok(())
    }
}

impl<S: FtpVerbs> RemoteStore for FtpStore<S> {
    fn site(&self) -> Site {
        Site::Cornell
    }

    fn ensure_directory(&mut self, path: &str) -> Result<()> {
        let walked = self.descend(path);
        // Return to the root even when the walk failed. The walk error
        // outranks a restore error.
        let restored = self.session.change_dir("/");
        walked.and(restored)
    }

    fn upload(&mut self, local: &Path, remote_dir: &str) -> Result<UploadOutcome> {
        let name = local_name(local)?;
        let listing = self.session.list(Some(remote_dir))?;
        if listing_has(&listing, name) {
            return Ok(UploadOutcome::AlreadyPresent);
        }
        self.session.set_binary()?;
        let remote_path = remote_join(remote_dir, name);
        tracing::debug!("STOR {}", remote_path);
        let bytes = self.session.store(&remote_path, local)?;
        let local_len = local.metadata()?.len();
        let remote_len = self.session.size_of(&remote_path)?;
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
        self.session.set_binary()?;
        tracing::debug!("RETR {}", remote_path);
        self.session.retrieve(remote_path, &target)?;
        Ok(target)
    }

    fn close(&mut self) -> Result<()> {
        self.session.quit()
    }
}

#[cfg(test)]
#[path = "ftp_tests.rs"]
mod tests;
