// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response bodies for the store's REST interface.
//!
//! The interface is small:
//! - `GET /notes` returns every note, newest first
//! - `POST /notes` creates a note from a [`NewNote`]
//! - `PATCH /notes/{id}` moves a note with a [`PositionPatch`]
//! - `DELETE /notes/{id}` removes a note and its comments
//! - `POST /notes/{id}/comments` appends a [`NewComment`]
//!
//! Decoding is lenient the way the store has always been: null text fields
//! read as empty, unknown enum strings fall back to their defaults, and
//! position fields that are not numbers are dropped instead of rejected.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::note::{AiRealness, AiType};

/// Submission for a new note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewNote {
    #[serde(deserialize_with = "lenient_string")]
    pub author_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub profession: String,
    #[serde(deserialize_with = "lenient_string")]
    pub industry: String,
    #[serde(deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(deserialize_with = "lenient_string")]
    pub use_case: String,
    #[serde(deserialize_with = "lenient_string")]
    pub experience: String,
    #[serde(deserialize_with = "lenient_enum")]
    pub ai_type: AiType,
    #[serde(deserialize_with = "lenient_enum")]
    pub ai_realness: AiRealness,
    #[serde(deserialize_with = "lenient_sentiment")]
    pub sentiment: i32,
    #[serde(deserialize_with = "lenient_string")]
    pub pain_points: String,
    #[serde(deserialize_with = "lenient_string")]
    pub extra_thoughts: String,
}

impl NewNote {
    /// Creates a submission with only the required use case set.
    pub fn with_use_case(use_case: impl Into<String>) -> Self {
        NewNote {
            use_case: use_case.into(),
            ..NewNote::default()
        }
    }

    /// Rejects submissions whose use case is blank after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.use_case.trim().is_empty() {
            return Err(Error::FieldRequired { field: "use case" });
        }
        Ok(())
    }
}

/// Submission for a new comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub text: String,
}

impl NewComment {
    pub fn new(author: Option<String>, text: impl Into<String>) -> Self {
        NewComment {
            author,
            text: text.into(),
        }
    }

    /// Rejects comments whose text is blank after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::FieldRequired {
                field: "comment text",
            });
        }
        Ok(())
    }
}

/// Partial position update. Absent or non-numeric coordinates are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionPatch {
    #[serde(
        deserialize_with = "numeric_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub x: Option<f64>,
    #[serde(
        deserialize_with = "numeric_only",
        skip_serializing_if = "Option::is_none"
    )]
    pub y: Option<f64>,
}

impl PositionPatch {
    /// Patch setting both coordinates.
    pub fn to(x: f64, y: f64) -> Self {
        PositionPatch {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns true if the patch carries no coordinate.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Error body returned for any non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Null reads as an empty string.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

pub(crate) fn lenient_enum<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// Accepts integers and integer strings; anything else reads as neutral.
fn lenient_sentiment<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let parsed = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(parsed
        .map(|n| n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(0))
}

fn numeric_only<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_f64())
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
