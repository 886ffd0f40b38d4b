//! End-to-end tests for `agendaboard export`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_export_svg_to_dir() {
    let (config_path, config_temp) = temp_config(&education_config());
    let out_dir = config_temp.path().join("exports");

    let output = run_with_config(
        &config_path,
        &["export", "--dir", out_dir.to_str().unwrap(), "--date", "2026-03-04"],
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        stderr_of(&output)
    );

    let expected = out_dir.join("Riverside-Elementary-Board-Meeting-Dashboard.svg");
    assert!(expected.exists(), "missing {}", expected.display());

    let svg = fs::read_to_string(&expected).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("#F0F4F8"), "branding background should be painted");
    assert!(svg.contains("Budget Review"));
    assert!(svg.contains("Library Expansion"));
    assert!(svg.contains("March 4, 2026"));
    assert!(stdout_of(&output).contains("Exported SVG"));
}

#[test]
fn test_export_markdown_to_file() {
    let (config_path, config_temp) = temp_config(&education_config());
    let out_path = config_temp.path().join("agenda.md");

    let output = run_with_config(
        &config_path,
        &[
            "export",
            "--format",
            "markdown",
            "--output",
            out_path.to_str().unwrap(),
            "--expanded",
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let markdown = fs::read_to_string(&out_path).unwrap();
    assert!(markdown.contains("# Riverside   Elementary"));
    assert!(markdown.contains("### 1. Budget Review"));
    assert!(markdown.contains("### 2. Library Expansion"));
    assert!(markdown.contains("> "), "expanded details are quoted");
}

#[test]
fn test_export_title_overrides() {
    let (config_path, config_temp) = empty_config_dir();
    let out_path = config_temp.path().join("board.md");

    let output = run_with_config(
        &config_path,
        &[
            "export",
            "-f",
            "markdown",
            "-o",
            out_path.to_str().unwrap(),
            "--name",
            "Harbor Food Bank",
            "--title",
            "Winter Drive",
            "--title",
            "Volunteer Shifts",
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let markdown = fs::read_to_string(&out_path).unwrap();
    assert!(markdown.contains("Harbor Food Bank"));
    assert!(markdown.contains("### 1. Winter Drive"));
    assert!(markdown.contains("### 2. Volunteer Shifts"));
    assert!(!markdown.contains("Fundraising Campaign"));
}

#[test]
fn test_export_rejects_bad_scale() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(
        &config_path,
        &["export", "--dir", config_temp.path().to_str().unwrap(), "--scale", "12"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Scale must be"));
}

#[test]
fn test_export_unwritable_target_is_io_error() {
    let (config_path, config_temp) = empty_config_dir();
    let blocker = config_temp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let output = run_with_config(
        &config_path,
        &["export", "--dir", blocker.join("sub").to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to export board"));
}

#[test]
fn test_export_invalid_config_is_validation_error() {
    let (config_path, config_temp) = empty_config_dir();
    fs::write(&config_path, "[dashboard]\nname = \"\"\n").unwrap();

    let output = run_with_config(&config_path, &["export"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to load configuration"));
}
