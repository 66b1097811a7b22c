// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flat JSON file store.
//!
//! The whole board lives in one pretty-printed JSON document. Every
//! operation reads the entire document, changes it in memory and writes the
//! entire document back. There is no locking and no versioning: two requests
//! that overlap can each read the same snapshot, and whichever writes last
//! replaces the other's changes wholesale.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::note::{Comment, Note};
use crate::protocol::{NewComment, NewNote, PositionPatch};

const STORE_FILE_NAME: &str = "stickies.json";

/// On-disk document layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub stickies: Vec<Note>,
}

/// Handle to the JSON document backing the board.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store file inside `data_dir`, creating the directory if needed.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Store {
            path: data_dir.join(STORE_FILE_NAME),
        })
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole document.
    ///
    /// A missing file is initialised with an empty board. A file that cannot
    /// be parsed reads as an empty board; the next write replaces it.
    pub fn read(&self) -> Result<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let initial = Document::default();
                self.write(&initial)?;
                return Ok(initial);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!("unreadable store {}: {}", self.path.display(), e);
                Ok(Document::default())
            }
        }
    }

    /// Replaces the whole document on disk.
    pub fn write(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// All notes, newest first by creation time.
    pub fn list(&self) -> Result<Vec<Note>> {
        let mut notes = self.read()?.stickies;
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    /// Validates and stores a new note, returning it as stored.
    ///
    /// Validation happens before the document is touched, so a rejected
    /// submission leaves the store unchanged.
    pub fn create(&self, new: NewNote) -> Result<Note> {
        new.validate()?;
        let mut doc = self.read()?;
        let note = Note::create(new, &mut rand::rng(), Utc::now())?;
        doc.stickies.push(note.clone());
        self.write(&doc)?;
        Ok(note)
    }

    /// Applies the coordinates present in `patch` and returns the updated note.
    pub fn update_position(&self, id: &str, patch: PositionPatch) -> Result<Note> {
        let mut doc = self.read()?;
        let note = doc
            .stickies
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;

        if let Some(x) = patch.x {
            note.x = x;
        }
        if let Some(y) = patch.y {
            note.y = y;
        }
        let updated = note.clone();

        self.write(&doc)?;
        Ok(updated)
    }

    /// Removes a note together with all of its comments.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut doc = self.read()?;
        let before = doc.stickies.len();
        doc.stickies.retain(|n| n.id != id);
        if doc.stickies.len() == before {
            return Err(Error::NoteNotFound(id.to_string()));
        }
        self.write(&doc)
    }

    /// Appends a comment to a note and returns the stored comment.
    pub fn add_comment(&self, id: &str, new: NewComment) -> Result<Comment> {
        new.validate()?;
        let mut doc = self.read()?;
        let note = doc
            .stickies
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))?;

        let comment = Comment::create(new, Utc::now())?;
        note.comments.push(comment.clone());

        self.write(&doc)?;
        Ok(comment)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
