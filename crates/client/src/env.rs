// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the client are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns the value of `CORKBOARD_URL` if set and non-empty.
pub fn server_url() -> Option<String> {
    std::env::var(vars::CORKBOARD_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Returns the value of `CORKBOARD_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::CORKBOARD_DIR).ok().map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
