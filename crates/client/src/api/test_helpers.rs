// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory [`BoardApi`] for unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use cb_core::protocol::{NewComment, NewNote, PositionPatch};
use cb_core::{Comment, Note};

use super::transport::{ApiError, ApiFuture, BoardApi};

/// A request observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(String),
    Patch { id: String, patch: PositionPatch },
    Delete(String),
    Comment { id: String, text: String },
}

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    calls: Vec<Call>,
    offline: bool,
    failing_lists: usize,
}

/// Mock transport behaving like the store server, without sockets.
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = MockApi::new();
        api.state.lock().unwrap().notes = notes;
        api
    }

    /// Inserts a note directly, as if another client had created it.
    pub fn seed(&self, note: Note) {
        self.state.lock().unwrap().notes.push(note);
    }

    /// Removes a note directly, as if another client had deleted it.
    pub fn remove(&self, id: &str) {
        self.state.lock().unwrap().notes.retain(|n| n.id != id);
    }

    /// Makes every request fail with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    /// Makes the next `n` list requests fail.
    pub fn fail_next_lists(&self, n: usize) {
        self.state.lock().unwrap().failing_lists = n;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn patches(&self) -> Vec<(String, PositionPatch)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Patch { id, patch } => Some((id, patch)),
                _ => None,
            })
            .collect()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.lock().unwrap().notes.clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.offline {
            return Err(ApiError::Request("mock offline".into()));
        }
        Ok(())
    }
}

impl BoardApi for MockApi {
    fn list_notes(&self) -> ApiFuture<'_, Vec<Note>> {
        Box::pin(async move {
            self.record(Call::List)?;
            let mut state = self.state.lock().unwrap();
            if state.failing_lists > 0 {
                state.failing_lists -= 1;
                return Err(ApiError::Status {
                    status: 500,
                    message: "mock failure".into(),
                });
            }
            let mut notes = state.notes.clone();
            notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(notes)
        })
    }

    fn create_note(&self, new: NewNote) -> ApiFuture<'_, Note> {
        Box::pin(async move {
            self.record(Call::Create(new.use_case.clone()))?;
            let note = Note::create(new, &mut rand::rng(), Utc::now())
                .map_err(|e| ApiError::Rejected(e.to_string()))?;
            self.state.lock().unwrap().notes.push(note.clone());
            Ok(note)
        })
    }

    fn update_position(&self, id: &str, patch: PositionPatch) -> ApiFuture<'_, Note> {
        let id = id.to_string();
        Box::pin(async move {
            self.record(Call::Patch {
                id: id.clone(),
                patch,
            })?;
            let mut state = self.state.lock().unwrap();
            let note = state
                .notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| ApiError::NotFound(id.clone()))?;
            if let Some(x) = patch.x {
                note.x = x;
            }
            if let Some(y) = patch.y {
                note.y = y;
            }
            Ok(note.clone())
        })
    }

    fn delete_note(&self, id: &str) -> ApiFuture<'_, ()> {
        let id = id.to_string();
        Box::pin(async move {
            self.record(Call::Delete(id.clone()))?;
            let mut state = self.state.lock().unwrap();
            let before = state.notes.len();
            state.notes.retain(|n| n.id != id);
            if state.notes.len() == before {
                return Err(ApiError::NotFound(id));
            }
            Ok(())
        })
    }

    fn add_comment(&self, id: &str, new: NewComment) -> ApiFuture<'_, Comment> {
        let id = id.to_string();
        Box::pin(async move {
            self.record(Call::Comment {
                id: id.clone(),
                text: new.text.clone(),
            })?;
            let comment =
                Comment::create(new, Utc::now()).map_err(|e| ApiError::Rejected(e.to_string()))?;
            let mut state = self.state.lock().unwrap();
            let note = state
                .notes
                .iter_mut()
                .find(|n| n.id == id)
                .ok_or_else(|| ApiError::NotFound(id.clone()))?;
            note.push_comment(comment.clone());
            Ok(comment)
        })
    }
}

/// Builds a note created `minutes_ago` minutes before now.
pub fn make_note(use_case: &str, minutes_ago: i64) -> Note {
    Note::create(
        NewNote::with_use_case(use_case),
        &mut rand::rng(),
        Utc::now() - Duration::minutes(minutes_ago),
    )
    .unwrap()
}
