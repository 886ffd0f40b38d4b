//! End-to-end tests for `agendaboard config`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use agendaboard::config::Config;
use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_init_writes_defaults_with_overrides() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(
        &config_path,
        &["config", "--init", "--category", "Healthcare", "--name", "City Clinic"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Configuration written to"));

    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.dashboard.category, "Healthcare");
    assert_eq!(loaded.dashboard.name, "City Clinic");
    assert_eq!(loaded.dashboard.titles.len(), 3);
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let (config_path, config_temp) = temp_config(&education_config());
    let before = fs::read_to_string(&config_path).unwrap();

    let output = run_with_config(&config_path, &["config", "--init"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--force"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), before);
}

#[test]
fn test_init_force_overwrites() {
    let (config_path, config_temp) = temp_config(&education_config());

    let output = run_with_config(&config_path, &["config", "--init", "--force"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let loaded = Config::load_from(&config_path).unwrap();
    assert_eq!(loaded.dashboard.category, "Animal Welfare");
}

#[test]
fn test_force_requires_init() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(&config_path, &["config", "--force"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(!config_path.exists());
}

#[test]
fn test_show_prints_effective_toml() {
    let (config_path, config_temp) = temp_config(&education_config());

    let output = run_with_config(&config_path, &["config", "--name", "Hillside Academy"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("[dashboard]"));
    assert!(stdout.contains("Hillside Academy"));
    assert!(stdout.contains("Library Expansion"));

    let parsed: Config = toml::from_str(&stdout).unwrap();
    assert_eq!(parsed.dashboard.name, "Hillside Academy");
}

#[test]
fn test_show_notes_unknown_category() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(&config_path, &["config", "--show", "--category", "Arts"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(stderr_of(&output).contains("uses the default branding"));
}
