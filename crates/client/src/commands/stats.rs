// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use cb_core::FilterCriteria;

use crate::api::BoardApi;
use crate::display::format_stats;
use crate::error::Result;
use crate::session::BoardSession;

pub async fn run<A>(
    session: &mut BoardSession<A>,
    criteria: FilterCriteria,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    session.load().await?;
    let shown = session.visible(&criteria).len();
    writeln!(out, "{}", format_stats(&session.board().stats(), shown))?;
    Ok(())
}
