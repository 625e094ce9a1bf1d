// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Upload configuration management.
//!
//! Configuration is stored in a TOML file and holds one endpoint per
//! archive site plus the test-area switch:
//! - `cornell`: FTPS endpoint for the Cornell archive
//! - `ubc`: SFTP endpoint for the UBC archive
//! - `test_area`: route uploads under the `Test` directory on both sites

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_ENV: &str = "PSRUP_CONFIG";
const CONFIG_DIR_NAME: &str = "psrup";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Upload configuration: one endpoint per archive site.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cornell archive endpoint (FTPS).
    pub cornell: FtpEndpoint,
    /// UBC archive endpoint (SFTP).
    pub ubc: SftpEndpoint,
    /// Route uploads under the `Test` directory on both sites.
    #[serde(default)]
    pub test_area: bool,
}

/// Credentials for the FTPS site.
#[derive(Debug, Clone, Deserialize)]
pub struct FtpEndpoint {
    pub host: String,
    /// Control-connection port (default: 21).
    #[serde(default = "default_ftp_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
}

/// Credentials for the SFTP site.
#[derive(Debug, Clone, Deserialize)]
pub struct SftpEndpoint {
    pub host: String,
    /// SSH port (default: 22).
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    pub user: String,
    /// Password authentication, tried after `key_file` when both are set.
    #[serde(default)]
    pub password: Option<String>,
    /// Private key for public-key authentication, tried first.
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

fn default_ftp_port() -> u16 {
    21
}

fn default_ssh_port() -> u16 {
    22
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Resolve the configuration path: `--config`, then `$PSRUP_CONFIG`, then
/// the user configuration directory.
pub fn find_config(cli_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| Error::Config("no user configuration directory".to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
