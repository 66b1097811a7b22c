// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server state management.
//!
//! Wraps the JSON store. There is deliberately no lock around it: each call
//! runs its own read-modify-write of the whole document on the blocking pool.

use std::path::Path;
use std::sync::Arc;

use cb_core::protocol::{NewComment, NewNote, PositionPatch};
use cb_core::{Comment, Error, Note, Result, Store};

/// Shared server state containing the store handle.
#[derive(Clone)]
pub struct ServerState {
    inner: Arc<ServerStateInner>,
}

struct ServerStateInner {
    store: Store,
}

impl ServerState {
    /// Creates server state backed by `stickies.json` in the given directory.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let store = Store::open(data_dir)?;
        Ok(ServerState {
            inner: Arc::new(ServerStateInner { store }),
        })
    }

    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        self.blocking(|store| store.list()).await
    }

    pub async fn create_note(&self, new: NewNote) -> Result<Note> {
        self.blocking(move |store| store.create(new)).await
    }

    pub async fn update_position(&self, id: String, patch: PositionPatch) -> Result<Note> {
        self.blocking(move |store| store.update_position(&id, patch))
            .await
    }

    pub async fn delete_note(&self, id: String) -> Result<()> {
        self.blocking(move |store| store.delete(&id)).await
    }

    pub async fn add_comment(&self, id: String, new: NewComment) -> Result<Comment> {
        self.blocking(move |store| store.add_comment(&id, new))
            .await
    }

    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.inner.store.clone();
        tokio::task::spawn_blocking(move || f(&store))
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))?
    }
}
