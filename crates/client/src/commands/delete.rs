// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::time::Instant;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::timeout;

use cb_core::confirm::CONFIRM_WINDOW;
use cb_core::DeletePress;

use crate::api::BoardApi;
use crate::display::short_id;
use crate::error::{Error, Result};
use crate::session::BoardSession;

use super::resolve_id;

/// Deletes a note after a second press inside the confirmation window.
///
/// With `yes` both presses happen at once. Otherwise the prompt answer is
/// the second press, and it only counts while the window is still open.
pub async fn run<A, R>(
    session: &mut BoardSession<A>,
    id: &str,
    yes: bool,
    answers: &mut R,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
    R: AsyncBufRead + Unpin,
{
    session.load().await?;
    let id = resolve_id(session.board(), id)?;
    let label = session
        .board()
        .get(&id)
        .map(|n| n.use_case.clone())
        .unwrap_or_default();

    let armed_at = Instant::now();
    session.press_delete(&id, armed_at);

    if !yes {
        write!(
            out,
            "Delete {} \"{}\" and its comments? [y/N] ",
            short_id(&id),
            label
        )?;
        out.flush()?;

        let mut answer = String::new();
        let read = timeout(CONFIRM_WINDOW, answers.read_line(&mut answer)).await;
        let window_ms = CONFIRM_WINDOW.as_millis();
        match read {
            Err(_) => {
                writeln!(out)?;
                return Err(Error::DeleteNotConfirmed { window_ms });
            }
            Ok(read) => {
                read?;
            }
        }
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            writeln!(out, "Kept {}", short_id(&id))?;
            return Ok(());
        }
        if !session.is_delete_armed(&id, Instant::now()) {
            return Err(Error::DeleteNotConfirmed { window_ms });
        }
    }

    if session.press_delete(&id, Instant::now()) != DeletePress::Confirmed {
        return Err(Error::DeleteNotConfirmed {
            window_ms: CONFIRM_WINDOW.as_millis(),
        });
    }
    session.settle().await;
    writeln!(out, "Deleted {}", short_id(&id))?;
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
