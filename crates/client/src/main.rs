// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cbrs::Cli;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = cbrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
