// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! psruprs - library behind the `psrup` archive uploader.
//!
//! `psrup` pushes pulsar observations to the two NANOGrav data archives:
//! the Cornell site over FTPS and the UBC site over SFTP. Inputs are
//! PSRFITS archives (uploaded as raw data with a generated ephemeris
//! companion) or processing manifests (uploaded together with the profiles
//! they list).
//!
//! # Main Components
//!
//! - [`cli`] - argument parsing and the usage/exit-code contract
//! - [`Config`] - archive endpoints and the test-area switch
//! - [`plan`] - turns inputs into work items with per-site directories
//! - [`store`] - the [`RemoteStore`](store::RemoteStore) transfer contract
//!   and its FTPS/SFTP implementations
//! - [`batch`] - one full pass per store, warn-and-continue
//! - [`Error`] - error types for all operations

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod plan;
pub mod store;
mod upload;

pub use cli::{Cli, Invocation};
pub use config::Config;
pub use error::{Error, Result};

/// Executes one upload invocation. This is the main entry point for the
/// binary and for library users alike.
pub fn run(cli: Cli) -> Result<()> {
    upload::run(cli)
}
