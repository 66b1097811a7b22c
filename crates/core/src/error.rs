// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cb-core operations.

use thiserror::Error;

/// All possible errors that can occur in cb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("{field} is required\n  hint: {field} cannot be blank")]
    FieldRequired { field: &'static str },

    #[error("invalid ai type: '{0}'\n  hint: valid types are: generative, predictive, automation, conversational, unsure")]
    InvalidAiType(String),

    #[error("invalid realness: '{0}'\n  hint: valid stages are: using, possible, imagined")]
    InvalidRealness(String),

    #[error("invalid sentiment bucket: '{0}'\n  hint: valid buckets are: optimistic, neutral, pessimistic")]
    InvalidSentimentBucket(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for cb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
