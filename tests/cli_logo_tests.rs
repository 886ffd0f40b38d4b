//! End-to-end tests for `agendaboard logo`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_logo_to_stdout() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(&config_path, &["logo"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let svg = stdout_of(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("goatGrad"), "Animal Welfare uses the goat motif");
    assert!(svg.contains(">GO<"));
}

#[test]
fn test_logo_to_file_uses_category_motif() {
    let (config_path, config_temp) = temp_config(&education_config());
    let out_path = config_temp.path().join("logos").join("school.svg");

    let output = run_with_config(&config_path, &["logo", "--output", out_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let svg = fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains(">RE<"));
    assert!(svg.contains("#4A90E2"));
    assert!(!svg.contains("goatGrad"));
}

#[test]
fn test_logo_escapes_organization_name() {
    let (config_path, config_temp) = empty_config_dir();

    let output = run_with_config(&config_path, &["logo", "--name", "<b> & co"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let svg = stdout_of(&output);
    assert!(svg.contains("&lt;&amp;"));
    assert!(!svg.contains("<b>"));
}
