// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Local client collection of notes.
//!
//! The board is refreshed wholesale from store snapshots and patched in place
//! by optimistic mutations between snapshots. Every patch replaces on a
//! matching identity, so the collection never holds two notes with the same
//! id.
//!
//! Merge rules:
//! - Snapshot: replaces everything, no field merge
//! - Created note: prepended (or replaced in place if already present)
//! - Comment: appended to the matching note
//! - Delete: removed immediately
//! - Position: set in place, clamped to non-negative coordinates

use std::collections::HashSet;

use crate::filter::SentimentBucket;
use crate::note::{Comment, Note};

/// Ordered in-memory collection of notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    notes: Vec<Note>,
}

/// Summary counts shown alongside the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub optimistic: usize,
    pub pessimistic: usize,
    /// Distinct non-empty industries.
    pub industries: usize,
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Builds a board from a snapshot (see [`Board::replace`]).
    pub fn from_snapshot(snapshot: Vec<Note>) -> Self {
        let mut board = Board::new();
        board.replace(snapshot);
        board
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the whole collection with a store snapshot.
    ///
    /// Snapshot order is kept. Should a snapshot ever repeat an identity, the
    /// first occurrence wins.
    pub fn replace(&mut self, snapshot: Vec<Note>) {
        let mut seen = HashSet::with_capacity(snapshot.len());
        self.notes = snapshot
            .into_iter()
            .filter(|n| seen.insert(n.id.clone()))
            .collect();
    }

    /// Adds a freshly created note at the front.
    pub fn prepend(&mut self, note: Note) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note,
            None => self.notes.insert(0, note),
        }
    }

    /// Appends a comment to the matching note. Returns false if the note is gone.
    pub fn append_comment(&mut self, note_id: &str, comment: Comment) -> bool {
        match self.notes.iter_mut().find(|n| n.id == note_id) {
            Some(note) => {
                note.push_comment(comment);
                true
            }
            None => false,
        }
    }

    /// Removes a note, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Moves a note, clamping to non-negative coordinates. Returns false if absent.
    pub fn set_position(&mut self, id: &str, x: f64, y: f64) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.set_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Notes in growth order for the forest view: oldest first.
    pub fn forest_order(&self) -> Vec<&Note> {
        let mut ordered: Vec<&Note> = self.notes.iter().collect();
        ordered.sort_by_key(|n| n.created_at);
        ordered
    }

    pub fn stats(&self) -> BoardStats {
        let industries: HashSet<&str> = self
            .notes
            .iter()
            .map(|n| n.industry.as_str())
            .filter(|s| !s.is_empty())
            .collect();

        BoardStats {
            total: self.notes.len(),
            optimistic: self
                .notes
                .iter()
                .filter(|n| SentimentBucket::of(n.sentiment) == SentimentBucket::Optimistic)
                .count(),
            pessimistic: self
                .notes
                .iter()
                .filter(|n| SentimentBucket::of(n.sentiment) == SentimentBucket::Pessimistic)
                .count(),
            industries: industries.len(),
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
