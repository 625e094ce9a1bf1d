// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The upload command: configuration, planning, transfer, summary.

use crate::batch;
use crate::cli::Cli;
use crate::config::{self, Config};
use crate::error::Result;
use crate::plan;
use crate::store::{FtpStore, RemoteStore, SftpStore};

/// Runs a full upload batch for the files named on the command line.
///
/// Configuration problems and connection refusals are fatal; everything
/// after that is per-file warnings and a summary.
pub fn run(cli: Cli) -> Result<()> {
    let path = config::find_config(cli.config.as_deref())?;
    let config = Config::load(&path)?;

    let items = plan::build(&cli.files, config.test_area);
    if items.is_empty() {
        println!("No files to upload.");
        return Ok(());
    }

    let mut stores: Vec<Box<dyn RemoteStore>> = Vec::new();
    if let Err(e) = connect_stores(&config, &mut stores) {
        // A failed second connect leaves the first session live; say
        // goodbye to it before failing.
        close_stores(&mut stores);
        return Err(e);
    }

    let report = batch::run_batch(&items, &mut stores);
    close_stores(&mut stores);

    println!(
        "Done: {} uploaded, {} already present, {} size mismatch(es), {} failure(s).",
        report.uploaded(),
        report.already_present(),
        report.mismatched(),
        report.failed()
    );
    Ok(())
}

/// Connects to both archives in batch order, Cornell then UBC. On failure
/// `stores` keeps whatever already connected, so the caller can close it.
fn connect_stores(config: &Config, stores: &mut Vec<Box<dyn RemoteStore>>) -> Result<()> {
    stores.push(Box::new(FtpStore::connect(&config.cornell)?));
    stores.push(Box::new(SftpStore::connect(&config.ubc)?));
    Ok(())
}

/// Closes every connected store; a refused goodbye is only a warning.
fn close_stores(stores: &mut [Box<dyn RemoteStore>]) {
    for store in stores.iter_mut() {
        if let Err(e) = store.close() {
            eprintln!("WARNING: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
