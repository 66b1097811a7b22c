// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `move` command: one drag gesture replayed from the command line.

use std::io::Write;

use chrono::Utc;

use cb_core::{DragOutcome, Point};

use crate::api::BoardApi;
use crate::display::{format_note_detail, short_id};
use crate::error::{Error, Result};
use crate::session::BoardSession;

use super::resolve_id;

pub async fn run<A>(
    session: &mut BoardSession<A>,
    id: &str,
    dx: f64,
    dy: f64,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    session.load().await?;
    let id = resolve_id(session.board(), id)?;

    let origin = Point::new(0.0, 0.0);
    if !session.pointer_down(&id, origin) {
        return Err(Error::NoteNotFound(id));
    }
    session.pointer_move(Point::new(dx, dy));

    match session.pointer_up() {
        Some(DragOutcome::Commit { note_id, x, y }) => {
            writeln!(out, "Moved {} to ({}, {})", short_id(&note_id), x, y)?;
        }
        Some(DragOutcome::Select { .. }) => {
            if let Some(note) = session.detail() {
                for line in format_note_detail(note, Utc::now()) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        None => {}
    }

    session.settle().await;
    Ok(())
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
