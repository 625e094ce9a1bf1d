// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Upload pulsar observations to the NANOGrav data archives.
///
/// Inputs are inspected by content: PSRFITS data files are uploaded as raw
/// data with a generated ephemeris companion, processing manifests are
/// uploaded together with the profiles they list, and anything else is
/// skipped with a warning.
#[derive(Debug, Parser)]
#[command(
    name = "psrup",
    version,
    after_help = "Configuration search order: --config, $PSRUP_CONFIG, ~/.config/psrup/config.toml."
)]
pub struct Cli {
    /// PSRFITS files or processing manifests to upload.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Configuration file with the archive endpoints.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Debug-level progress output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// What a parsed command line asks the process to do.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    Exit(i32),
}

/// Parse arguments, honoring the no-argument and bad-flag contracts:
/// an empty file list prints usage and exits 0, unknown flags exit 1.
pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) if cli.files.is_empty() => {
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            Invocation::Exit(0)
        }
        Ok(cli) => Invocation::Run(cli),
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            Invocation::Exit(code)
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
