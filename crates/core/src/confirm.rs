// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-step delete confirmation.
//!
//! The first press on a note's delete control arms a confirmation; a second
//! press on the same note within the window performs the delete. The
//! confirmation disarms by itself once the window has passed.

use std::time::{Duration, Instant};

/// How long an armed confirmation stays live.
pub const CONFIRM_WINDOW: Duration = Duration::from_millis(2500);

/// Result of pressing delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePress {
    /// Confirmation armed; press again to delete.
    Armed,
    /// Second press inside the window: delete now.
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct DeleteConfirm {
    window: Duration,
    armed: Option<(String, Instant)>,
}

impl Default for DeleteConfirm {
    fn default() -> Self {
        DeleteConfirm::new(CONFIRM_WINDOW)
    }
}

impl DeleteConfirm {
    pub fn new(window: Duration) -> Self {
        DeleteConfirm {
            window,
            armed: None,
        }
    }

    pub fn press(&mut self, note_id: &str, now: Instant) -> DeletePress {
        if self.is_armed(note_id, now) {
            self.armed = None;
            return DeletePress::Confirmed;
        }
        self.armed = Some((note_id.to_string(), now));
        DeletePress::Armed
    }

    pub fn is_armed(&self, note_id: &str, now: Instant) -> bool {
        match &self.armed {
            Some((id, at)) => id == note_id && now.saturating_duration_since(*at) < self.window,
            None => false,
        }
    }

    /// Drops any armed confirmation (e.g. the pointer left the note).
    pub fn disarm(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_press_inside_window_confirms() {
        let mut confirm = DeleteConfirm::default();
        let t0 = Instant::now();

        assert_eq!(confirm.press("n1", t0), DeletePress::Armed);
        assert!(confirm.is_armed("n1", t0 + Duration::from_millis(100)));
        assert_eq!(
            confirm.press("n1", t0 + Duration::from_millis(2499)),
            DeletePress::Confirmed
        );
        assert!(!confirm.is_armed("n1", t0 + Duration::from_millis(2499)));
    }

    #[test]
    fn confirmation_expires() {
        let mut confirm = DeleteConfirm::default();
        let t0 = Instant::now();

        confirm.press("n1", t0);
        assert!(!confirm.is_armed("n1", t0 + CONFIRM_WINDOW));
        assert_eq!(confirm.press("n1", t0 + CONFIRM_WINDOW), DeletePress::Armed);
    }

    #[test]
    fn pressing_another_note_rearms_for_that_note() {
        let mut confirm = DeleteConfirm::default();
        let t0 = Instant::now();

        confirm.press("n1", t0);
        assert_eq!(confirm.press("n2", t0), DeletePress::Armed);
        assert!(!confirm.is_armed("n1", t0));
        assert!(confirm.is_armed("n2", t0));
    }

    #[test]
    fn disarm_clears() {
        let mut confirm = DeleteConfirm::default();
        let t0 = Instant::now();
        confirm.press("n1", t0);
        confirm.disarm();
        assert_eq!(confirm.press("n1", t0), DeletePress::Armed);
    }
}
