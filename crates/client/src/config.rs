// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `config.toml` inside the client state directory
//! and includes:
//! - `url`: base URL of the store server
//! - `poll_interval_ms`: how often the board is refetched
//! - `drag_threshold_px`: displacement that turns a press into a drag
//!
//! `CORKBOARD_URL` overrides `url`; `CORKBOARD_DIR` overrides the directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "corkboard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the store server.
    #[serde(default = "default_url")]
    pub url: String,
    /// Snapshot poll interval in milliseconds (default: 5000).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Pointer displacement in pixels that starts a drag (default: 4).
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
}

fn default_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_drag_threshold_px() -> f64 {
    cb_core::drag::DEFAULT_THRESHOLD_PX
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: default_url(),
            poll_interval_ms: default_poll_interval_ms(),
            drag_threshold_px: default_drag_threshold_px(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from `state_dir`, falling back to defaults when absent.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the poller and drag tracker cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config(
                "poll_interval_ms must be greater than 0".to_string(),
            ));
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px <= 0.0 {
            return Err(Error::Config(format!(
                "drag_threshold_px must be a positive number, got {}",
                self.drag_threshold_px
            )));
        }
        Ok(())
    }

    /// Loads the config and applies environment overrides.
    pub fn resolve(state_dir: &Path) -> Result<Self> {
        let mut config = Config::load(state_dir)?;
        if let Some(url) = env::server_url() {
            config.url = url;
        }
        Ok(config)
    }

    /// Writes `config.toml` into `state_dir`, creating the directory if needed.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        fs::create_dir_all(state_dir)?;
        let content = toml::to_string_pretty(self)?;
        fs::write(state_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Returns the client state directory.
///
/// Resolution order: `CORKBOARD_DIR`, the platform config directory, then
/// `.corkboard` in the working directory.
pub fn state_dir() -> PathBuf {
    if let Some(dir) = env::state_dir() {
        return dir;
    }
    dirs::config_dir()
        .map(|d| d.join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".corkboard"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
