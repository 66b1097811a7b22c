// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use chrono::Utc;

use crate::api::BoardApi;
use crate::cli::OutputFormat;
use crate::display::format_note_detail;
use crate::error::{Error, Result};
use crate::session::BoardSession;

use super::{resolve_id, write_json};

pub async fn run<A>(
    session: &mut BoardSession<A>,
    id: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    session.load().await?;
    let id = resolve_id(session.board(), id)?;
    let note = session
        .board()
        .get(&id)
        .ok_or_else(|| Error::NoteNotFound(id.clone()))?;

    match output {
        OutputFormat::Json => write_json(out, note),
        OutputFormat::Text => {
            for line in format_note_detail(note, Utc::now()) {
                writeln!(out, "{}", line)?;
            }
            Ok(())
        }
    }
}
