// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! View projection over the local note collection.
//!
//! Criteria are AND-combined. An unset (or empty) criterion imposes no
//! restriction. The projection never reorders or mutates its input.
//!
//! # Criteria
//!
//! - `industry` - exact match on the industry field
//! - `ai_type` - exact AI type
//! - `realness` - exact realness stage
//! - `sentiment` - bucket: optimistic (>= 1), neutral (0), pessimistic (<= -1)
//! - `search` - case-insensitive substring of use case, author, industry or experience

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::note::{AiRealness, AiType, Note};

/// Coarse classification of the integer sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentBucket {
    Optimistic,
    Neutral,
    Pessimistic,
}

impl SentimentBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBucket::Optimistic => "optimistic",
            SentimentBucket::Neutral => "neutral",
            SentimentBucket::Pessimistic => "pessimistic",
        }
    }

    /// Bucket a raw sentiment value falls into.
    pub fn of(sentiment: i32) -> Self {
        match sentiment {
            s if s >= 1 => SentimentBucket::Optimistic,
            s if s <= -1 => SentimentBucket::Pessimistic,
            _ => SentimentBucket::Neutral,
        }
    }

    pub fn contains(&self, sentiment: i32) -> bool {
        Self::of(sentiment) == *self
    }
}

impl fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SentimentBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "optimistic" => Ok(SentimentBucket::Optimistic),
            "neutral" => Ok(SentimentBucket::Neutral),
            "pessimistic" => Ok(SentimentBucket::Pessimistic),
            _ => Err(Error::InvalidSentimentBucket(s.to_string())),
        }
    }
}

/// Active filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub industry: Option<String>,
    pub ai_type: Option<AiType>,
    pub realness: Option<AiRealness>,
    pub sentiment: Option<SentimentBucket>,
    pub search: Option<String>,
}

impl FilterCriteria {
    /// Returns true if any criterion restricts the result.
    pub fn is_active(&self) -> bool {
        non_empty(&self.industry).is_some()
            || self.ai_type.is_some()
            || self.realness.is_some()
            || self.sentiment.is_some()
            || non_empty(&self.search).is_some()
    }

    /// Tests a single note against every active criterion.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(industry) = non_empty(&self.industry) {
            if note.industry != industry {
                return false;
            }
        }
        if let Some(ai_type) = self.ai_type {
            if note.ai_type != ai_type {
                return false;
            }
        }
        if let Some(realness) = self.realness {
            if note.ai_realness != realness {
                return false;
            }
        }
        if let Some(bucket) = self.sentiment {
            if !bucket.contains(note.sentiment) {
                return false;
            }
        }
        if let Some(query) = non_empty(&self.search) {
            let query = query.to_lowercase();
            let hit = [
                &note.use_case,
                &note.author_name,
                &note.industry,
                &note.experience,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        true
    }

    /// Ordered subsequence of `notes` that satisfies every active criterion.
    pub fn project<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
