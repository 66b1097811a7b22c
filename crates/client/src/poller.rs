// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot poller.
//!
//! Fetches the full note collection once immediately and then on a fixed
//! interval. A failed fetch of any kind is dropped silently: the caller keeps
//! its previous collection and the next tick simply tries again. There is no
//! backoff and polling never pauses.

use std::time::Duration;

use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::debug;

use cb_core::Note;

use crate::api::BoardApi;

/// Shortest interval a ticker is built with.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    loaded: bool,
    failures: u64,
}

impl Poller {
    /// Creates a poller. A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Poller {
            interval: interval.max(MIN_INTERVAL),
            loaded: false,
            failures: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True once the first snapshot has arrived.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of fetches dropped so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Tick source whose first tick completes immediately.
    pub fn ticker(&self) -> Interval {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    /// Performs one fetch. Returns the snapshot, or `None` if it was dropped.
    pub async fn poll<A: BoardApi + ?Sized>(&mut self, api: &A) -> Option<Vec<Note>> {
        match api.list_notes().await {
            Ok(notes) => {
                self.loaded = true;
                debug!("snapshot with {} notes", notes.len());
                Some(notes)
            }
            Err(e) => {
                self.failures += 1;
                debug!("snapshot fetch dropped: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
