// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pointer-driven drag sessions.
//!
//! A client has at most one live session. The lifecycle is:
//!
//! ```text
//!   Idle ──pointer_down──► Armed ──displacement ≥ threshold──► Dragging
//!     ▲                      │                                   │
//!     │                 pointer_up                          pointer_up
//!     │                      ▼                                   ▼
//!     └──────────── Select { note_id }          Commit { note_id, x, y }
//! ```
//!
//! Drag versus click is decided only by cumulative pointer displacement since
//! the session was armed, never by elapsed time. Once the threshold has been
//! reached the session stays a drag, even if the pointer returns to where it
//! started.

use tracing::debug;

/// Minimum displacement, on either axis, that turns a press into a drag.
pub const DEFAULT_THRESHOLD_PX: f64 = 4.0;

/// A point in board coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Observable phase of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Armed,
    Dragging,
}

/// What a finished gesture asks the caller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Send exactly one position update with these coordinates.
    Commit { note_id: String, x: f64, y: f64 },
    /// Open the note for detail viewing; nothing is written.
    Select { note_id: String },
}

/// State of one in-progress gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    note_id: String,
    /// Pointer position at pointer-down.
    origin: Point,
    /// Note position at pointer-down.
    start: Point,
    /// Latest pointer position.
    current: Point,
    exceeded: bool,
}

impl DragSession {
    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn exceeded_threshold(&self) -> bool {
        self.exceeded
    }

    /// Where the note sits for the current pointer position, clamped to
    /// non-negative coordinates.
    pub fn position(&self) -> Point {
        Point {
            x: (self.start.x + self.current.x - self.origin.x).max(0.0),
            y: (self.start.y + self.current.y - self.origin.y).max(0.0),
        }
    }
}

/// Owns the (at most one) live drag session of a client.
#[derive(Debug, Clone)]
pub struct DragTracker {
    threshold: f64,
    session: Option<DragSession>,
}

impl Default for DragTracker {
    fn default() -> Self {
        DragTracker::new(DEFAULT_THRESHOLD_PX)
    }
}

impl DragTracker {
    pub fn new(threshold: f64) -> Self {
        DragTracker {
            threshold,
            session: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(s) if s.exceeded => DragPhase::Dragging,
            Some(_) => DragPhase::Armed,
        }
    }

    /// Arms a session for `note_id`.
    ///
    /// Ignored (returns false) while another session is live.
    pub fn pointer_down(&mut self, note_id: &str, pointer: Point, note_position: Point) -> bool {
        if let Some(active) = &self.session {
            debug!(
                "ignoring pointer-down on {} while {} is active",
                note_id, active.note_id
            );
            return false;
        }
        self.session = Some(DragSession {
            note_id: note_id.to_string(),
            origin: pointer,
            start: note_position,
            current: pointer,
            exceeded: false,
        });
        true
    }

    /// Tracks pointer movement.
    ///
    /// Returns the note and its new optimistic position while dragging, or
    /// `None` if idle or still under the threshold.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<(&str, Point)> {
        let threshold = self.threshold;
        let session = self.session.as_mut()?;
        session.current = pointer;
        if !session.exceeded {
            let dx = (pointer.x - session.origin.x).abs();
            let dy = (pointer.y - session.origin.y).abs();
            session.exceeded = dx >= threshold || dy >= threshold;
        }
        if session.exceeded {
            let position = session.position();
            Some((session.note_id.as_str(), position))
        } else {
            None
        }
    }

    /// Ends the session, wherever the pointer was released.
    ///
    /// Returns `None` if no session was live.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        let session = self.session.take()?;
        if session.exceeded {
            let Point { x, y } = session.position();
            Some(DragOutcome::Commit {
                note_id: session.note_id,
                x,
                y,
            })
        } else {
            Some(DragOutcome::Select {
                note_id: session.note_id,
            })
        }
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
