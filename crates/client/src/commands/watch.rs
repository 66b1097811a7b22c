// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Follows the board from the command line.
//!
//! Each snapshot prints a stats line with the notes that appeared and
//! vanished since the previous one. Dropped polls print nothing.

use std::collections::HashSet;
use std::io::Write;

use chrono::Local;

use crate::api::BoardApi;
use crate::display::format_stats;
use crate::error::Result;
use crate::session::BoardSession;

/// Polls until `count` snapshots have been shown, or until Ctrl-C.
pub async fn run<A>(
    session: &mut BoardSession<A>,
    count: Option<u64>,
    out: &mut impl Write,
) -> Result<()>
where
    A: BoardApi + Clone + 'static,
{
    let mut ticker = session.poller().ticker();
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let mut shown = 0u64;
    let mut previous: Option<HashSet<String>> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut interrupt => break,
        }
        if !session.refresh().await {
            continue;
        }

        let ids: HashSet<String> = session
            .board()
            .notes()
            .iter()
            .map(|n| n.id.clone())
            .collect();
        let mut line = format_stats(&session.board().stats(), session.board().len());
        if let Some(prev) = &previous {
            let added = ids.difference(prev).count();
            let gone = prev.difference(&ids).count();
            if added > 0 || gone > 0 {
                line.push_str(&format!(" (+{} -{})", added, gone));
            }
        }
        writeln!(out, "[{}] {}", Local::now().format("%H:%M:%S"), line)?;
        out.flush()?;
        previous = Some(ids);

        shown += 1;
        if count.is_some_and(|c| shown >= c) {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use super::*;
    use crate::api::test_helpers::{make_note, Call, MockApi};
    use crate::commands::testing::output;
    use crate::config::Config;

    #[tokio::test(start_paused = true)]
    async fn reports_changes_between_snapshots() {
        let gone = make_note("gone soon", 20);
        let gone_id = gone.id.clone();
        let api = MockApi::with_notes(vec![gone, make_note("stays", 10)]);
        let mut session = BoardSession::new(api.clone(), &Config::default());

        let other = api.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(2)).await;
            other.seed(make_note("arrived", 0));
            other.remove(&gone_id);
        });

        let mut buf = Vec::new();
        run(&mut session, Some(2), &mut buf).await.unwrap();

        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("2 stories · 0 optimistic · 0 pessimistic · 0 industries"));
        assert!(lines[1].ends_with("(+1 -1)"));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_polls_print_nothing() {
        let api = MockApi::with_notes(vec![make_note("only", 1)]);
        api.fail_next_lists(2);
        let mut session = BoardSession::new(api.clone(), &Config::default());
        let mut buf = Vec::new();

        run(&mut session, Some(1), &mut buf).await.unwrap();

        assert_eq!(output(buf).lines().count(), 1);
        assert_eq!(api.calls(), vec![Call::List, Call::List, Call::List]);
        assert_eq!(session.poller().failures(), 2);
    }
}
