// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cb-server: HTTP store server for the corkboard.
//!
//! Serves the note collection from a single JSON document on disk. Every
//! request reads and rewrites the whole document; clients poll for changes.

mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// cb-server: corkboard store server
#[derive(Parser, Debug)]
#[command(name = "cb-server")]
#[command(about = "HTTP store server for the corkboard story board")]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "0.0.0.0:3001")]
    bind: SocketAddr,

    /// Directory holding stickies.json
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cb-server");
    info!("  Bind address: {}", args.bind);
    info!("  Data directory: {}", args.data.display());

    let state = state::ServerState::new(&args.data)?;
    info!("  Store file: {}", state.store().path().display());

    server::run(args.bind, state).await?;

    Ok(())
}
