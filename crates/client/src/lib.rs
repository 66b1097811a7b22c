// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cbrs - client library for the corkboard story board.
//!
//! This crate provides everything behind the `cb` CLI: the HTTP transport to
//! the store server, the client board session (snapshot polling, optimistic
//! mutations, drag gestures and delete confirmation) and the commands.
//!
//! # Main Components
//!
//! - [`BoardSession`] - local board state plus pending background requests
//! - [`api::BoardApi`] - transport seam, implemented over HTTP by [`api::HttpApi`]
//! - [`Config`] - client configuration (`config.toml` plus environment)
//! - [`Error`] - error types for all operations

pub mod api;
mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
pub mod help;
pub mod poller;
pub mod prefs;
pub mod session;

pub use api::ApiError;
pub use cli::{Cli, Command, FilterArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use prefs::Prefs;
pub use session::BoardSession;

use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use cb_core::protocol::{NewComment, NewNote};

use api::HttpApi;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let state_dir = config::state_dir();
    let mut out = std::io::stdout();

    match cli.command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cb", &mut out);
            Ok(())
        }
        Command::Name { name, clear } => commands::name::run(&state_dir, name, clear, &mut out),
        command => {
            let mut config = Config::resolve(&state_dir)?;
            if let Some(url) = cli.url {
                config.url = url;
            }
            let prefs = Prefs::load(&state_dir)?;
            debug!("using store server at {}", config.url);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(async {
                let mut session = BoardSession::new(HttpApi::new(&config.url), &config);
                let result = dispatch(&mut session, &prefs, command, &mut out).await;
                session.settle().await;
                result
            });
            out.flush()?;
            result
        }
    }
}

async fn dispatch(
    session: &mut BoardSession<HttpApi>,
    prefs: &Prefs,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::List {
            filters,
            forest,
            output,
        } => commands::list::run(session, filters.criteria(), forest, output, out).await,
        Command::Show { id, output } => commands::show::run(session, &id, output, out).await,
        Command::New {
            use_case,
            author,
            profession,
            industry,
            region,
            experience,
            ai_type,
            realness,
            sentiment,
            pain_points,
            thoughts,
            output,
        } => {
            let new = NewNote {
                author_name: prefs.author(author).unwrap_or_default(),
                profession: profession.unwrap_or_default(),
                industry: industry.unwrap_or_default(),
                region: region.unwrap_or_default(),
                use_case,
                experience: experience.unwrap_or_default(),
                ai_type: ai_type.unwrap_or_default(),
                ai_realness: realness.unwrap_or_default(),
                sentiment,
                pain_points: pain_points.unwrap_or_default(),
                extra_thoughts: thoughts.unwrap_or_default(),
            };
            commands::new::run(session, new, output, out).await
        }
        Command::Comment { id, text, author } => {
            let new = NewComment::new(prefs.author(author), text);
            commands::comment::run(session, &id, new, out).await
        }
        Command::Move { id, dx, dy } => commands::position::run(session, &id, dx, dy, out).await,
        Command::Delete { id, yes } => {
            let mut answers = tokio::io::BufReader::new(tokio::io::stdin());
            commands::delete::run(session, &id, yes, &mut answers, out).await
        }
        Command::Watch { count } => commands::watch::run(session, count, out).await,
        Command::Stats { filters } => commands::stats::run(session, filters.criteria(), out).await,
        // Handled before the runtime starts.
        Command::Name { .. } | Command::Completion { .. } => Ok(()),
    }
}
