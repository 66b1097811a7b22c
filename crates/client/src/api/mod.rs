// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client access to the store server.
//!
//! [`BoardApi`] abstracts the five REST calls so the session and poller can
//! run against [`HttpApi`] in production and an in-memory mock in tests.

mod transport;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use transport::{ApiError, ApiFuture, ApiResult, BoardApi, HttpApi};
