// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use cb_core::protocol::NewNote;

use crate::api::BoardApi;
use crate::cli::OutputFormat;
use crate::display::short_id;
use crate::error::Result;
use crate::session::BoardSession;

use super::write_json;

pub async fn run<A>(
    session: &mut BoardSession<A>,
    new: NewNote,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    let note = session.create(new).await?;

    match output {
        OutputFormat::Json => write_json(out, &note),
        OutputFormat::Text => {
            writeln!(
                out,
                "Pinned {}: {} (by {})",
                short_id(&note.id),
                note.use_case,
                note.author_name
            )?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
