// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! Routes:
//!
//! | Method | Path                   | Success                  |
//! |--------|------------------------|--------------------------|
//! | GET    | `/notes`               | 200, newest first        |
//! | POST   | `/notes`               | 201, created note        |
//! | PATCH  | `/notes/{id}`          | 200, updated note        |
//! | DELETE | `/notes/{id}`          | 200, `{"success": true}` |
//! | POST   | `/notes/{id}/comments` | 201, created comment     |
//!
//! Failures answer with `{"error": "..."}`.

use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use cb_core::protocol::{DeleteAck, ErrorBody, NewComment, NewNote, PositionPatch};
use cb_core::{Comment, Note};

use crate::state::ServerState;

/// Run the HTTP server on the given address.
pub async fn run(addr: SocketAddr, state: ServerState) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?);
    serve(listener, state).await?;
    Ok(())
}

/// Serve requests from an already bound listener until it fails.
pub(crate) async fn serve(listener: TcpListener, state: ServerState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

pub(crate) fn router(state: ServerState) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", patch(update_position).delete(delete_note))
        .route("/notes/{id}/comments", post(add_comment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error returned by request handlers.
#[derive(Debug)]
pub(crate) enum ApiError {
    /// Request body was not valid JSON for the route.
    Malformed(String),
    Core(cb_core::Error),
}

impl From<cb_core::Error> for ApiError {
    fn from(e: cb_core::Error) -> Self {
        ApiError::Core(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Malformed(e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use cb_core::Error;

        let (status, message) = match self {
            ApiError::Malformed(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Core(e) => {
                let status = match &e {
                    Error::NoteNotFound(_) => StatusCode::NOT_FOUND,
                    Error::FieldRequired { .. }
                    | Error::InvalidAiType(_)
                    | Error::InvalidRealness(_)
                    | Error::InvalidSentimentBucket(_) => StatusCode::BAD_REQUEST,
                    Error::Io(_) | Error::Json(_) | Error::CorruptedData(_) => {
                        error!("store failure: {}", e);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                // Drop the CLI hint line from the wire message.
                let text = e.to_string();
                let first = text.lines().next().unwrap_or_default().to_string();
                (status, first)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

async fn list_notes(State(state): State<ServerState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.list_notes().await?;
    debug!("listing {} notes", notes.len());
    Ok(Json(notes))
}

async fn create_note(
    State(state): State<ServerState>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(new) = payload?;
    let note = state.create_note(new).await?;
    info!("created note {}", note.id);
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_position(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<PositionPatch>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let Json(patch) = payload?;
    if patch.is_empty() {
        debug!("position patch for {} carries no numeric coordinate", id);
    }
    let note = state.update_position(id, patch).await?;
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    state.delete_note(id.clone()).await?;
    info!("deleted note {}", id);
    Ok(Json(DeleteAck { success: true }))
}

async fn add_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let Json(new) = payload?;
    let comment = state.add_comment(id.clone(), new).await?;
    debug!("comment {} added to {}", comment.id, id);
    Ok((StatusCode::CREATED, Json(comment)))
}
