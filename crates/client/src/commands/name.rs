// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::prefs::Prefs;

/// Shows, sets or clears the saved display name.
pub fn run(
    state_dir: &Path,
    name: Option<String>,
    clear: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut prefs = Prefs::load(state_dir)?;

    if clear {
        prefs.set_display_name("");
        prefs.save(state_dir)?;
        writeln!(out, "Display name cleared")?;
        return Ok(());
    }

    if let Some(name) = name {
        prefs.set_display_name(&name);
        prefs.save(state_dir)?;
    }

    match &prefs.display_name {
        Some(name) => writeln!(out, "Display name: {}", name)?,
        None => writeln!(out, "No display name set (posting as Anonymous)")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::commands::testing::output;
    use tempfile::TempDir;

    fn name(dir: &Path, value: Option<&str>, clear: bool) -> String {
        let mut buf = Vec::new();
        run(dir, value.map(String::from), clear, &mut buf).unwrap();
        output(buf)
    }

    #[test]
    fn set_show_and_clear() {
        let temp = TempDir::new().unwrap();

        assert_eq!(
            name(temp.path(), None, false),
            "No display name set (posting as Anonymous)\n"
        );
        assert_eq!(name(temp.path(), Some(" Rae "), false), "Display name: Rae\n");
        assert_eq!(name(temp.path(), None, false), "Display name: Rae\n");
        assert_eq!(name(temp.path(), None, true), "Display name cleared\n");
        assert_eq!(Prefs::load(temp.path()).unwrap().display_name, None);
    }

    #[test]
    fn blank_name_clears() {
        let temp = TempDir::new().unwrap();
        name(temp.path(), Some("Rae"), false);

        let shown = name(temp.path(), Some("  "), false);

        assert!(shown.starts_with("No display name set"));
    }
}
