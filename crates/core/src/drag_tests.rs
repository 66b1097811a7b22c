// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn armed(note_at: Point) -> DragTracker {
    let mut tracker = DragTracker::default();
    assert!(tracker.pointer_down("n1", Point::new(100.0, 100.0), note_at));
    tracker
}

#[test]
fn starts_idle() {
    let mut tracker = DragTracker::default();
    assert_eq!(tracker.phase(), DragPhase::Idle);
    assert!(tracker.pointer_move(Point::new(50.0, 50.0)).is_none());
    assert!(tracker.pointer_up().is_none());
}

#[test]
fn pointer_down_arms() {
    let tracker = armed(Point::new(10.0, 10.0));
    assert_eq!(tracker.phase(), DragPhase::Armed);
    assert_eq!(tracker.session().unwrap().note_id(), "n1");
}

#[parameterized(
    no_move = { 0.0, 0.0 },
    small_x = { 3.0, 0.0 },
    small_y = { 0.0, -3.9 },
    small_both = { 3.5, 3.5 },
)]
fn below_threshold_is_selection(dx: f64, dy: f64) {
    let mut tracker = armed(Point::new(10.0, 10.0));
    assert!(tracker
        .pointer_move(Point::new(100.0 + dx, 100.0 + dy))
        .is_none());
    assert_eq!(tracker.phase(), DragPhase::Armed);

    let outcome = tracker.pointer_up().unwrap();

    assert_eq!(
        outcome,
        DragOutcome::Select {
            note_id: "n1".into()
        }
    );
    assert_eq!(tracker.phase(), DragPhase::Idle);
}

#[parameterized(
    exactly_x = { 4.0, 0.0 },
    exactly_y = { 0.0, 4.0 },
    negative_x = { -4.0, 0.0 },
    far = { 80.0, 25.0 },
)]
fn at_or_above_threshold_is_commit(dx: f64, dy: f64) {
    let mut tracker = armed(Point::new(200.0, 200.0));
    let (id, pos) = tracker
        .pointer_move(Point::new(100.0 + dx, 100.0 + dy))
        .unwrap();
    assert_eq!(id, "n1");
    assert_eq!(pos, Point::new(200.0 + dx, 200.0 + dy));
    assert_eq!(tracker.phase(), DragPhase::Dragging);

    let outcome = tracker.pointer_up().unwrap();

    assert_eq!(
        outcome,
        DragOutcome::Commit {
            note_id: "n1".into(),
            x: 200.0 + dx,
            y: 200.0 + dy,
        }
    );
    assert_eq!(tracker.phase(), DragPhase::Idle);
}

#[test]
fn threshold_is_cumulative_from_origin_not_per_event() {
    let mut tracker = armed(Point::new(0.0, 0.0));
    // Many tiny steps that add up past the threshold.
    for step in 1..=5 {
        tracker.pointer_move(Point::new(100.0 + step as f64, 100.0));
    }
    assert_eq!(tracker.phase(), DragPhase::Dragging);
}

#[test]
fn returning_to_origin_still_commits() {
    let mut tracker = armed(Point::new(30.0, 30.0));
    tracker.pointer_move(Point::new(120.0, 100.0));
    tracker.pointer_move(Point::new(100.0, 100.0));

    assert_eq!(
        tracker.pointer_up().unwrap(),
        DragOutcome::Commit {
            note_id: "n1".into(),
            x: 30.0,
            y: 30.0,
        }
    );
}

#[test]
fn positions_are_clamped_to_non_negative() {
    let mut tracker = armed(Point::new(10.0, 5.0));
    let (_, pos) = tracker.pointer_move(Point::new(0.0, 20.0)).unwrap();
    assert_eq!(pos, Point::new(0.0, 0.0));

    match tracker.pointer_up().unwrap() {
        DragOutcome::Commit { x, y, .. } => {
            assert!(x >= 0.0);
            assert!(y >= 0.0);
        }
        other => panic!("expected commit, got {:?}", other),
    }
}

#[test]
fn second_pointer_down_is_ignored_while_active() {
    let mut tracker = armed(Point::new(10.0, 10.0));

    assert!(!tracker.pointer_down("n2", Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    assert_eq!(tracker.session().unwrap().note_id(), "n1");

    tracker.pointer_up();
    assert!(tracker.pointer_down("n2", Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
}

#[test]
fn custom_threshold() {
    let mut tracker = DragTracker::new(10.0);
    tracker.pointer_down("n1", Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert!(tracker.pointer_move(Point::new(9.0, 9.0)).is_none());
    assert!(tracker.pointer_move(Point::new(10.0, 0.0)).is_some());
}
