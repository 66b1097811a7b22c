// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client board session.
//!
//! Holds everything one client knows: the local [`Board`], the snapshot
//! poller, the drag tracker, the delete confirmation and the open detail
//! view. Mutations are applied locally first and then sent to the server.
//!
//! Create and comment submissions are awaited so the caller can show a
//! failure next to the entered text. Position commits and deletes are
//! fire-and-forget: they are spawned onto `in_flight` and their failures are
//! only logged. Nothing is rolled back; the next snapshot is trusted.

use std::time::Instant;

use tokio::task::JoinSet;
use tracing::debug;

use cb_core::drag::DragPhase;
use cb_core::protocol::{NewComment, NewNote, PositionPatch};
use cb_core::{
    Board, Comment, DeleteConfirm, DeletePress, DragOutcome, DragTracker, FilterCriteria, Note,
    Point,
};

use crate::api::BoardApi;
use crate::config::Config;
use crate::error::Result;
use crate::poller::Poller;

pub struct BoardSession<A> {
    api: A,
    board: Board,
    poller: Poller,
    drag: DragTracker,
    confirm: DeleteConfirm,
    detail: Option<Note>,
    in_flight: JoinSet<()>,
}

impl<A> BoardSession<A>
where
    A: BoardApi + Clone + 'static,
{
    pub fn new(api: A, config: &Config) -> Self {
        BoardSession {
            api,
            board: Board::new(),
            poller: Poller::new(config.poll_interval()),
            drag: DragTracker::new(config.drag_threshold_px),
            confirm: DeleteConfirm::default(),
            detail: None,
            in_flight: JoinSet::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// The note open for detail viewing, if any.
    pub fn detail(&self) -> Option<&Note> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Number of spawned requests not yet collected.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Notes passing `criteria`, in board order.
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<&Note> {
        criteria.project(self.board.notes())
    }

    // ── Snapshots ──────────────────────────────────────────────────────────

    /// Runs one poll. Returns true if a snapshot replaced the board.
    pub async fn refresh(&mut self) -> bool {
        match self.poller.poll(&self.api).await {
            Some(notes) => {
                self.apply_snapshot(notes);
                true
            }
            None => false,
        }
    }

    /// One-shot fetch for commands that cannot work without the board.
    ///
    /// Unlike [`refresh`](Self::refresh), a failure is returned to the caller.
    pub async fn load(&mut self) -> Result<()> {
        let notes = self.api.list_notes().await?;
        self.apply_snapshot(notes);
        Ok(())
    }

    /// Replaces the board wholesale. The open detail copy is left as is.
    pub fn apply_snapshot(&mut self, notes: Vec<Note>) {
        self.board.replace(notes);
    }

    // ── Submissions ────────────────────────────────────────────────────────

    /// Creates a note and prepends the server's copy to the board.
    pub async fn create(&mut self, new: NewNote) -> Result<Note> {
        new.validate()?;
        let note = self.api.create_note(new).await?;
        self.board.prepend(note.clone());
        Ok(note)
    }

    /// Adds a comment and appends the server's copy locally.
    pub async fn add_comment(&mut self, note_id: &str, new: NewComment) -> Result<Comment> {
        new.validate()?;
        let comment = self.api.add_comment(note_id, new).await?;
        if !self.board.append_comment(note_id, comment.clone()) {
            debug!("comment {} added to note {} missing locally", comment.id, note_id);
        }
        if let Some(detail) = self.detail.as_mut().filter(|d| d.id == note_id) {
            detail.push_comment(comment.clone());
        }
        Ok(comment)
    }

    // ── Delete ─────────────────────────────────────────────────────────────

    /// Presses the delete control of a note. The second press inside the
    /// confirmation window deletes it.
    pub fn press_delete(&mut self, note_id: &str, now: Instant) -> DeletePress {
        let press = self.confirm.press(note_id, now);
        if press == DeletePress::Confirmed {
            self.delete(note_id);
        }
        press
    }

    pub fn is_delete_armed(&self, note_id: &str, now: Instant) -> bool {
        self.confirm.is_armed(note_id, now)
    }

    /// Removes the note locally and sends the delete without waiting.
    pub fn delete(&mut self, note_id: &str) {
        if self.board.remove(note_id).is_none() {
            debug!("deleting note {} not present locally", note_id);
        }
        if self.detail.as_ref().is_some_and(|d| d.id == note_id) {
            self.detail = None;
        }

        let api = self.api.clone();
        let id = note_id.to_string();
        self.in_flight.spawn(async move {
            if let Err(e) = api.delete_note(&id).await {
                debug!("delete of {} failed: {}", id, e);
            }
        });
    }

    // ── Pointer gestures ───────────────────────────────────────────────────

    /// Starts a gesture over a note. Returns false if the note is unknown or
    /// another gesture is live.
    pub fn pointer_down(&mut self, note_id: &str, pointer: Point) -> bool {
        let Some(note) = self.board.get(note_id) else {
            return false;
        };
        let at = Point::new(note.x, note.y);
        self.drag.pointer_down(note_id, pointer, at)
    }

    /// Moves the live gesture; once dragging, the local note follows.
    pub fn pointer_move(&mut self, pointer: Point) {
        if let Some((id, at)) = self.drag.pointer_move(pointer) {
            self.board.set_position(id, at.x, at.y);
        }
    }

    /// Ends the live gesture.
    ///
    /// A drag sends one position update in the background; a click opens the
    /// note for detail viewing.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        let outcome = self.drag.pointer_up()?;
        match &outcome {
            DragOutcome::Commit { note_id, x, y } => {
                self.board.set_position(note_id, *x, *y);
                let api = self.api.clone();
                let id = note_id.clone();
                let patch = PositionPatch::to(*x, *y);
                self.in_flight.spawn(async move {
                    if let Err(e) = api.update_position(&id, patch).await {
                        debug!("position update for {} failed: {}", id, e);
                    }
                });
            }
            DragOutcome::Select { note_id } => {
                self.detail = self.board.get(note_id).cloned();
            }
        }
        Some(outcome)
    }

    /// Waits for every spawned request to finish.
    pub async fn settle(&mut self) {
        while let Some(joined) = self.in_flight.join_next().await {
            if let Err(e) = joined {
                debug!("background request aborted: {}", e);
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
