// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use psruprs::cli::{self, Invocation};

fn main() {
    let cli = match cli::parse(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Exit(code) => std::process::exit(code),
    };

    init_tracing(cli.verbose);

    if let Err(e) = psruprs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
