//! End-to-end tests for `agendaboard summary`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use serde_json::Value;

mod fixtures;
use fixtures::*;

fn summary_json(config_path: &std::path::Path, extra: &[&str]) -> Value {
    let mut args = vec!["summary", "--json"];
    args.extend_from_slice(extra);
    let output = run_with_config(config_path, &args);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    serde_json::from_str(&stdout_of(&output)).expect("summary output should be valid JSON")
}

#[test]
fn test_default_board_summary_json() {
    let (config_path, config_temp) = empty_config_dir();

    let json = summary_json(&config_path, &[]);

    assert_eq!(json["organizationName"], "Goats of Anarchy");
    assert_eq!(json["organizationCategory"], "Animal Welfare");
    assert_eq!(json["branding"]["primaryColor"], "#FF6B35");
    assert_eq!(json["summary"]["totalTopics"], 3);
    assert_eq!(json["summary"]["inProgressCount"], 0);
    assert_eq!(json["summary"]["completedCount"], 0);
    assert_eq!(json["summary"]["totalMinutes"], 95);

    let topics = json["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0]["order"], 0);
    assert_eq!(topics[0]["title"], "$10 Million Fundraising Campaign");
    assert_eq!(topics[0]["status"], "not-started");
    assert_eq!(topics[0]["priority"], "high");
    assert_eq!(topics[1]["estimatedMinutes"], 20);
}

#[test]
fn test_summary_json_with_generic_titles() {
    let (config_path, config_temp) = temp_config(&education_config());

    let json = summary_json(&config_path, &[]);

    assert_eq!(json["organizationCategory"], "Education");
    assert_eq!(json["branding"]["backgroundColor"], "#F0F4F8");
    assert_eq!(json["branding"]["fontFamily"], "'Georgia', serif");
    assert_eq!(json["summary"]["totalTopics"], 2);
    assert_eq!(json["summary"]["totalMinutes"], 50);
    assert_eq!(json["topics"][1]["title"], "Library Expansion");
    assert_eq!(json["topics"][1]["priority"], "medium");
}

#[test]
fn test_summary_unknown_category_uses_default_palette() {
    let (config_path, config_temp) = empty_config_dir();

    let json = summary_json(&config_path, &["--category", "Arts"]);

    assert_eq!(json["organizationCategory"], "Arts");
    assert_eq!(json["branding"]["primaryColor"], "#6366F1");
}

#[test]
fn test_summary_human_readable() {
    let (config_path, config_temp) = temp_config(&education_config());

    let output = run_with_config(&config_path, &["summary"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Riverside   Elementary (Education)"));
    assert!(stdout.contains(" 1. Budget Review"));
    assert!(stdout.contains(" 2. Library Expansion"));
    assert!(stdout.contains("Topics:      2"));
    assert!(stdout.contains("Minutes:     50"));
}

#[test]
fn test_summary_rejects_blank_title() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(&config_path, &["summary", "--title", "Budget", "--title", "  "]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error:"));
}
