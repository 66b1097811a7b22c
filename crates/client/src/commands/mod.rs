// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod comment;
pub mod delete;
pub mod list;
pub mod name;
pub mod new;
pub mod position;
pub mod show;
pub mod stats;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod watch;

use std::io::Write;

use serde::Serialize;

use cb_core::Board;

use crate::error::{Error, Result};

/// Resolves a full note id or a unique id prefix against the board.
pub fn resolve_id(board: &Board, input: &str) -> Result<String> {
    let input = input.trim();
    if board.contains(input) {
        return Ok(input.to_string());
    }

    let matches: Vec<String> = board
        .notes()
        .iter()
        .filter(|n| !input.is_empty() && n.id.starts_with(input))
        .map(|n| n.id.clone())
        .collect();

    match matches.len() {
        0 => Err(Error::NoteNotFound(input.to_string())),
        1 => Ok(matches.into_iter().next().unwrap_or_default()),
        _ => Err(Error::AmbiguousId {
            prefix: input.to_string(),
            matches,
        }),
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
