// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::api::ApiError;

/// All possible errors that can occur in the cbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("ambiguous note id '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("{field} is required\n  hint: {field} cannot be blank")]
    FieldRequired { field: &'static str },

    #[error("invalid ai type: '{0}'\n  hint: valid types are: generative, predictive, automation, conversational, unsure")]
    InvalidAiType(String),

    #[error("invalid realness: '{0}'\n  hint: valid stages are: using, possible, imagined")]
    InvalidRealness(String),

    #[error("invalid sentiment bucket: '{0}'\n  hint: valid buckets are: optimistic, neutral, pessimistic")]
    InvalidSentimentBucket(String),

    #[error("delete not confirmed within {window_ms}ms\n  hint: run the delete again, or pass --yes")]
    DeleteNotConfirmed { window_ms: u128 },

    #[error("server error: {0}")]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for cbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<cb_core::Error> for Error {
    fn from(e: cb_core::Error) -> Self {
        match e {
            cb_core::Error::NoteNotFound(id) => Error::NoteNotFound(id),
            cb_core::Error::FieldRequired { field } => Error::FieldRequired { field },
            cb_core::Error::InvalidAiType(s) => Error::InvalidAiType(s),
            cb_core::Error::InvalidRealness(s) => Error::InvalidRealness(s),
            cb_core::Error::InvalidSentimentBucket(s) => Error::InvalidSentimentBucket(s),
            cb_core::Error::Io(e) => Error::Io(e),
            cb_core::Error::Json(e) => Error::Json(e),
            cb_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
