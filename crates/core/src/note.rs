// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core note types for the corkboard.
//!
//! A [`Note`] is one submitted story, rendered as a sticky note on the board.
//! Identity, colour, rotation and creation time are fixed when the store
//! creates the note; only the position and the comment list change afterwards.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::palette::color_for_sentiment;
use crate::protocol::{NewComment, NewNote};

/// Author shown when no name was given.
pub const ANONYMOUS: &str = "Anonymous";

/// Half-width of the random tilt applied to new notes, in degrees.
const MAX_ROTATION_DEG: f64 = 4.0;

/// New notes are scattered across a virtual 900x600 canvas.
const SCATTER_MARGIN: u32 = 20;
const SCATTER_WIDTH: u32 = 680;
const SCATTER_HEIGHT: u32 = 460;

/// Kind of AI the story is about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiType {
    /// Text, images, video, audio.
    Generative,
    /// Data analysis, forecasting.
    Predictive,
    /// Workflows, process automation.
    Automation,
    /// Chatbots, voice assistants.
    Conversational,
    /// A combination, or not known.
    #[default]
    Unsure,
}

impl AiType {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiType::Generative => "generative",
            AiType::Predictive => "predictive",
            AiType::Automation => "automation",
            AiType::Conversational => "conversational",
            AiType::Unsure => "unsure",
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AiType::Generative => "Generative",
            AiType::Predictive => "Predictive",
            AiType::Automation => "Automation",
            AiType::Conversational => "Conversational",
            AiType::Unsure => "Mixed / Unsure",
        }
    }
}

impl fmt::Display for AiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AiType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "generative" => Ok(AiType::Generative),
            "predictive" => Ok(AiType::Predictive),
            "automation" => Ok(AiType::Automation),
            "conversational" => Ok(AiType::Conversational),
            "unsure" => Ok(AiType::Unsure),
            _ => Err(Error::InvalidAiType(s.to_string())),
        }
    }
}

/// How real the described use of AI is today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiRealness {
    /// Already in practice.
    Using,
    /// Possible in the near future.
    Possible,
    /// Future vision.
    #[default]
    Imagined,
}

impl AiRealness {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AiRealness::Using => "using",
            AiRealness::Possible => "possible",
            AiRealness::Imagined => "imagined",
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AiRealness::Using => "In practice",
            AiRealness::Possible => "Possible soon",
            AiRealness::Imagined => "Future vision",
        }
    }
}

impl fmt::Display for AiRealness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AiRealness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "using" => Ok(AiRealness::Using),
            "possible" => Ok(AiRealness::Possible),
            "imagined" => Ok(AiRealness::Imagined),
            _ => Err(Error::InvalidRealness(s.to_string())),
        }
    }
}

/// A reaction attached to a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Display name of the commenter.
    pub author: String,
    /// Comment body, never blank.
    pub text: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Builds a comment from a submission, assigning identity and timestamp.
    ///
    /// Fails with [`Error::FieldRequired`] when the text is blank.
    pub fn create(new: NewComment, now: DateTime<Utc>) -> Result<Self> {
        new.validate()?;
        Ok(Comment {
            id: uuid::Uuid::new_v4().to_string(),
            author: author_or_anonymous(new.author.as_deref().unwrap_or_default()),
            text: new.text.trim().to_string(),
            created_at: now,
        })
    }
}

/// A single story on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,
    pub author_name: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub region: String,
    /// "I want AI to ..." headline. Required.
    pub use_case: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default, deserialize_with = "crate::protocol::lenient_enum")]
    pub ai_type: AiType,
    #[serde(default, deserialize_with = "crate::protocol::lenient_enum")]
    pub ai_realness: AiRealness,
    /// Feeling about AI, nominally -2 (very pessimistic) to 2 (very optimistic).
    #[serde(default)]
    pub sentiment: i32,
    #[serde(default)]
    pub pain_points: String,
    #[serde(default)]
    pub extra_thoughts: String,
    /// Background colour derived from the sentiment at creation.
    pub color: String,
    /// Tilt in degrees, fixed at creation.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note from a submission.
    ///
    /// Assigns a fresh identity, the palette colour for the sentiment, a small
    /// random rotation and a scattered default position. Text fields are trimmed.
    pub fn create<R: Rng>(new: NewNote, rng: &mut R, now: DateTime<Utc>) -> Result<Self> {
        new.validate()?;

        let rotation =
            (rng.random_range(-MAX_ROTATION_DEG..MAX_ROTATION_DEG) * 100.0).round() / 100.0;
        let x = f64::from(rng.random_range(0..SCATTER_WIDTH) + SCATTER_MARGIN);
        let y = f64::from(rng.random_range(0..SCATTER_HEIGHT) + SCATTER_MARGIN);

        Ok(Note {
            id: uuid::Uuid::new_v4().to_string(),
            author_name: author_or_anonymous(&new.author_name),
            profession: new.profession.trim().to_string(),
            industry: new.industry.trim().to_string(),
            region: new.region.trim().to_string(),
            use_case: new.use_case.trim().to_string(),
            experience: new.experience.trim().to_string(),
            ai_type: new.ai_type,
            ai_realness: new.ai_realness,
            sentiment: new.sentiment,
            pain_points: new.pain_points.trim().to_string(),
            extra_thoughts: new.extra_thoughts.trim().to_string(),
            color: color_for_sentiment(new.sentiment).to_string(),
            rotation,
            x,
            y,
            comments: Vec::new(),
            created_at: now,
        })
    }

    /// Moves the note, clamping both coordinates to be non-negative.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x.max(0.0);
        self.y = y.max(0.0);
    }

    /// Appends a comment, replacing an existing one with the same identity.
    pub fn push_comment(&mut self, comment: Comment) {
        match self.comments.iter_mut().find(|c| c.id == comment.id) {
            Some(existing) => *existing = comment,
            None => self.comments.push(comment),
        }
    }
}

fn author_or_anonymous(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ANONYMOUS.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
