// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {list}        List notes on the board
  {show}        Show a note with its comments
  {new}         Pin a new story to the board
  {comment}     Comment on a note
  {mv}        Drag a note by an offset
  {delete}      Delete a note (asks for confirmation)
  {watch}       Follow the board as it changes
  {stats}       Show board totals

{header_setup}
  {name}        Show or set your display name
  {completion}  Generate shell completions
",
        header_board = colors::header("Board:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        new = colors::literal("new"),
        comment = colors::literal("comment"),
        mv = colors::literal("move"),
        delete = colors::literal("delete"),
        watch = colors::literal("watch"),
        stats = colors::literal("stats"),
        name = colors::literal("name"),
        completion = colors::literal("completion"),
    )
}
