// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use cb_core::{FilterCriteria, Note};

use crate::api::BoardApi;
use crate::cli::OutputFormat;
use crate::display::format_note_line;
use crate::error::Result;
use crate::session::BoardSession;

use super::write_json;

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    notes: Vec<&'a Note>,
    shown: usize,
    total: usize,
}

pub async fn run<A>(
    session: &mut BoardSession<A>,
    criteria: FilterCriteria,
    forest: bool,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    session.load().await?;

    let board = session.board();
    let visible = if forest {
        board
            .forest_order()
            .into_iter()
            .filter(|n| criteria.matches(n))
            .collect()
    } else {
        session.visible(&criteria)
    };

    match output {
        OutputFormat::Json => write_json(
            out,
            &ListOutputJson {
                shown: visible.len(),
                total: board.len(),
                notes: visible,
            },
        ),
        OutputFormat::Text => {
            let now = Utc::now();
            for note in &visible {
                writeln!(out, "{}", format_note_line(note, now))?;
            }
            if board.is_empty() {
                writeln!(out, "The board is empty. Add a story with `cb new`.")?;
            } else if criteria.is_active() {
                writeln!(out, "\n{} of {} shown", visible.len(), board.len())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
