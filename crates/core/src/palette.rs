// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sentiment colour palette.
//!
//! The store picks a note's background from its sentiment when the note is
//! created. Values outside the palette get [`FALLBACK_COLOR`].

/// Colour for sentiments with no palette entry.
pub const FALLBACK_COLOR: &str = "#FEF9C3";

/// Palette entries, from very pessimistic to very optimistic.
pub const SENTIMENT_COLORS: [(i32, &str); 5] = [
    (-2, "#A8D8F0"), // sky blue
    (-1, "#C9BAED"), // lavender
    (0, "#A8EDCE"),  // mint
    (1, "#FFE566"),  // yellow
    (2, "#FFC48C"),  // peach
];

/// Returns the palette colour for a sentiment value.
pub fn color_for_sentiment(sentiment: i32) -> &'static str {
    SENTIMENT_COLORS
        .iter()
        .find(|(value, _)| *value == sentiment)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}
