// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cb-core: Shared library for the corkboard story board
//!
//! This crate provides the note data model, the flat JSON store, and the
//! client-side state primitives (board collection, drag sessions, delete
//! confirmation, filter projection) used by both the `cb` client and the
//! `cb-server` store server.

pub mod board;
pub mod confirm;
pub mod drag;
pub mod error;
pub mod filter;
pub mod note;
pub mod palette;
pub mod protocol;
pub mod store;

pub use board::{Board, BoardStats};
pub use confirm::{DeleteConfirm, DeletePress};
pub use drag::{DragOutcome, DragTracker, Point};
pub use error::{Error, Result};
pub use filter::{FilterCriteria, SentimentBucket};
pub use note::{AiRealness, AiType, Comment, Note};
pub use protocol::{NewComment, NewNote, PositionPatch};
pub use store::Store;
