// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};

use cb_core::{BoardStats, Note};

use crate::colors;

/// Maximum line width for wrapped text content (excluding indent).
const WRAP_WIDTH: usize = 88;

/// Number of id characters shown in list output.
const SHORT_ID_LEN: usize = 8;

/// Relative age label: "just now", "5m ago", "3h ago", "2d ago".
///
/// Timestamps in the future read as "just now".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created_at).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Leading characters of a note id, enough to pick it out of a list.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Signed sentiment label, e.g. "+2", "0", "-1".
pub fn sentiment_label(sentiment: i32) -> String {
    if sentiment > 0 {
        format!("+{}", sentiment)
    } else {
        sentiment.to_string()
    }
}

/// One-line summary of a note.
///
/// Format: `{short_id} [{sentiment}] {use_case} ({author}, {industry}, {age})`
pub fn format_note_line(note: &Note, now: DateTime<Utc>) -> String {
    let mut context = vec![note.author_name.clone()];
    if !note.industry.is_empty() {
        context.push(note.industry.clone());
    }
    context.push(time_ago(note.created_at, now));
    let comments = match note.comments.len() {
        0 => String::new(),
        1 => " · 1 comment".to_string(),
        n => format!(" · {} comments", n),
    };

    format!(
        "{} [{}] {} {}",
        colors::literal(short_id(&note.id)),
        sentiment_label(note.sentiment),
        note.use_case,
        colors::context(&format!("({}){}", context.join(", "), comments)),
    )
}

/// Full detail view of a note with its comments.
pub fn format_note_detail(note: &Note, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colors::header(&note.use_case),
        colors::context(&format!("[{}]", note.id))
    ));
    lines.push(format!(
        "  By: {}  ({})",
        note.author_name,
        time_ago(note.created_at, now)
    ));

    let fields = [
        ("Profession", note.profession.as_str()),
        ("Industry", note.industry.as_str()),
        ("Region", note.region.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            lines.push(format!("  {}: {}", label, value));
        }
    }
    lines.push(format!("  AI type: {}", note.ai_type.label()));
    lines.push(format!("  Stage: {}", note.ai_realness.label()));
    lines.push(format!(
        "  Sentiment: {}  {}",
        sentiment_label(note.sentiment),
        colors::swatch(&note.color)
    ));
    lines.push(format!("  Position: ({}, {})", note.x, note.y));

    let sections = [
        ("Experience", note.experience.as_str()),
        ("Pain points", note.pain_points.as_str()),
        ("Other thoughts", note.extra_thoughts.as_str()),
    ];
    for (label, text) in sections {
        if text.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("{}:", colors::header(label)));
        for line in wrap_text(text, WRAP_WIDTH).lines() {
            lines.push(format!("    {}", line));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} ({}):",
        colors::header("Comments"),
        note.comments.len()
    ));
    for comment in &note.comments {
        lines.push(format!(
            "  {} {}",
            comment.author,
            colors::context(&time_ago(comment.created_at, now))
        ));
        for line in wrap_text(&comment.text, WRAP_WIDTH).lines() {
            lines.push(format!("    {}", line));
        }
    }

    lines
}

/// Summary counts line, with "N of M shown" when a filter hides notes.
pub fn format_stats(stats: &BoardStats, shown: usize) -> String {
    let mut line = format!(
        "{} stories · {} optimistic · {} pessimistic · {} industries",
        stats.total, stats.optimistic, stats.pessimistic, stats.industries
    );
    if shown != stats.total {
        line.push_str(&format!(" · {} of {} shown", shown, stats.total));
    }
    line
}

/// Wrap text at word boundaries if it's a single line.
///
/// Text that already contains newlines is returned as-is.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
