// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.url, "http://localhost:3001");
    assert_eq!(config.poll_interval(), Duration::from_millis(5000));
    assert_eq!(config.drag_threshold_px, 4.0);
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "url = \"http://board.example:8080\"\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config.url, "http://board.example:8080");
    assert_eq!(config.poll_interval_ms, 5000);
    assert_eq!(config.drag_threshold_px, 4.0);
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nested");
    let config = Config {
        url: "http://10.0.0.2:3001".into(),
        poll_interval_ms: 1000,
        drag_threshold_px: 8.0,
    };

    config.save(&dir).unwrap();

    assert_eq!(Config::load(&dir).unwrap(), config);
}

#[test]
fn invalid_toml_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "poll_interval_ms = \"soon\"").unwrap();

    let err = Config::load(temp.path()).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[yare::parameterized(
    zero_interval = { "poll_interval_ms = 0", "poll_interval_ms" },
    zero_threshold = { "drag_threshold_px = 0.0", "drag_threshold_px" },
    negative_threshold = { "drag_threshold_px = -4.0", "drag_threshold_px" },
    nan_threshold = { "drag_threshold_px = nan", "drag_threshold_px" },
    infinite_threshold = { "drag_threshold_px = inf", "drag_threshold_px" },
)]
fn unusable_values_are_config_errors(content: &str, key: &str) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), content).unwrap();

    let err = Config::load(temp.path()).unwrap_err();

    assert!(matches!(&err, Error::Config(msg) if msg.contains(key)), "{err}");
}

#[test]
fn smallest_usable_values_load() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "poll_interval_ms = 1\ndrag_threshold_px = 0.5\n",
    )
    .unwrap();

    let config = Config::load(temp.path()).unwrap();

    assert_eq!(config.poll_interval(), Duration::from_millis(1));
    assert_eq!(config.drag_threshold_px, 0.5);
}
