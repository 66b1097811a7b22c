// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the store's REST interface.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use cb_core::protocol::{DeleteAck, ErrorBody, NewComment, NewNote, PositionPatch};
use cb_core::{Comment, Note};

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The server does not know the note.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server refused the submission (HTTP 400).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Any other non-success status.
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Result type for transport operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by every [`BoardApi`] call.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// The store server's REST interface.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait BoardApi: Send + Sync {
    /// Fetch every note, newest first.
    fn list_notes(&self) -> ApiFuture<'_, Vec<Note>>;

    /// Create a note; the server assigns identity, color, rotation and position.
    fn create_note(&self, new: NewNote) -> ApiFuture<'_, Note>;

    /// Apply a partial position update.
    fn update_position(&self, id: &str, patch: PositionPatch) -> ApiFuture<'_, Note>;

    /// Delete a note and its comments.
    fn delete_note(&self, id: &str) -> ApiFuture<'_, ()>;

    /// Append a comment to a note.
    fn add_comment(&self, id: &str, new: NewComment) -> ApiFuture<'_, Comment>;
}

/// HTTP transport implementation using reqwest.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Create a transport for the server at `base_url` (e.g. `http://localhost:3001`).
    pub fn new(base_url: &str) -> Self {
        HttpApi {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl BoardApi for HttpApi {
    fn list_notes(&self) -> ApiFuture<'_, Vec<Note>> {
        Box::pin(async move {
            let resp = self
                .client
                .get(self.url("/notes"))
                .send()
                .await
                .map_err(request_error)?;
            decode(resp).await
        })
    }

    fn create_note(&self, new: NewNote) -> ApiFuture<'_, Note> {
        Box::pin(async move {
            let resp = self
                .client
                .post(self.url("/notes"))
                .json(&new)
                .send()
                .await
                .map_err(request_error)?;
            decode(resp).await
        })
    }

    fn update_position(&self, id: &str, patch: PositionPatch) -> ApiFuture<'_, Note> {
        let url = self.url(&format!("/notes/{}", id));
        Box::pin(async move {
            let resp = self
                .client
                .patch(url)
                .json(&patch)
                .send()
                .await
                .map_err(request_error)?;
            decode(resp).await
        })
    }

    fn delete_note(&self, id: &str) -> ApiFuture<'_, ()> {
        let url = self.url(&format!("/notes/{}", id));
        Box::pin(async move {
            let resp = self
                .client
                .delete(url)
                .send()
                .await
                .map_err(request_error)?;
            let ack: DeleteAck = decode(resp).await?;
            if !ack.success {
                debug!("server acknowledged delete without success");
            }
            Ok(())
        })
    }

    fn add_comment(&self, id: &str, new: NewComment) -> ApiFuture<'_, Comment> {
        let url = self.url(&format!("/notes/{}/comments", id));
        Box::pin(async move {
            let resp = self
                .client
                .post(url)
                .json(&new)
                .send()
                .await
                .map_err(request_error)?;
            decode(resp).await
        })
    }
}

fn request_error(e: reqwest::Error) -> ApiError {
    ApiError::Request(e.to_string())
}

/// Turns a response into its decoded body or the matching error.
async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let status = resp.status();
    if status.is_success() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };
    Err(error_for_status(status, message))
}

pub(crate) fn error_for_status(status: StatusCode, message: String) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST => ApiError::Rejected(message),
        other => ApiError::Status {
            status: other.as_u16(),
            message,
        },
    }
}
