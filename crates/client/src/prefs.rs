// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-user preferences kept across sessions.
//!
//! Currently only the display name, which pre-fills author fields on new
//! notes and comments. Stored in `prefs.toml` next to `config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const PREFS_FILE_NAME: &str = "prefs.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Prefs {
    /// Loads preferences, treating a missing file as empty.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(PREFS_FILE_NAME);
        if !path.exists() {
            return Ok(Prefs::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, state_dir: &Path) -> Result<()> {
        fs::create_dir_all(state_dir)?;
        fs::write(
            state_dir.join(PREFS_FILE_NAME),
            toml::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    /// Sets the display name; a blank name clears it.
    pub fn set_display_name(&mut self, name: &str) {
        let name = name.trim();
        self.display_name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Author to submit: an explicit value wins, then the saved name.
    pub fn author(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.display_name.clone())
    }
}
