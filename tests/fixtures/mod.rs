//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use agendaboard::config::{Config, ThemeMode};
use agendaboard::models::Topic;
use agendaboard::services::{generate_topics, SequentialIds};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the agendaboard binary
pub fn agendaboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_agendaboard")
}

/// Config for a school board with two agenda items.
pub fn education_config() -> Config {
    let mut config = Config::new();
    config.dashboard.category = "Education".to_string();
    config.dashboard.name = "Riverside   Elementary".to_string();
    config.dashboard.titles = vec!["Budget Review".to_string(), "Library Expansion".to_string()];
    config.ui.theme_mode = ThemeMode::Dark;
    config
}

/// Writes `config` into a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn temp_config(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    config.save_to(&path).expect("Failed to write config");
    (path, temp_dir)
}

/// Temp directory with no config file in it (defaults apply).
pub fn empty_config_dir() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}

/// Runs the binary with `--config` pointing at `config_path`.
pub fn run_with_config(config_path: &Path, args: &[&str]) -> Output {
    Command::new(agendaboard_bin())
        .args(args)
        .arg("--config")
        .arg(config_path)
        .output()
        .expect("Failed to execute command")
}

/// Topics with ids `topic-1`, `topic-2`, ...
pub fn sample_topics(titles: &[&str]) -> Vec<Topic> {
    generate_topics(titles, "Default", &mut SequentialIds::new())
}

/// Titles in list order.
pub fn titles_of(topics: &[Topic]) -> Vec<String> {
    topics.iter().map(|t| t.title.clone()).collect()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
