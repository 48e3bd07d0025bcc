use crate::config::{Config, MirrorGroup, TestSuite};
use crate::StyleGuardError;

use super::validate_config_semantics;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn zero_threshold_is_rejected() {
    let mut config = Config::default();
    config.lines.threshold = 0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("lines.threshold"));
}

#[test]
fn empty_extensions_are_rejected() {
    let mut config = Config::default();
    config.scan.extensions.clear();
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn empty_exemption_is_rejected() {
    let mut config = Config::default();
    config.lines.long_line_exemptions.push(String::new());
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn mirror_group_without_mirror_is_fatal() {
    let mut config = Config::default();
    config.mirrors.push(MirrorGroup {
        files: vec!["src/only.h".to_string()],
    });
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::EmptyMirrorGroup { index: 1 }));
}

#[test]
fn mirror_group_with_no_entries_is_fatal() {
    let config = Config {
        mirrors: vec![MirrorGroup { files: Vec::new() }],
        ..Config::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::EmptyMirrorGroup { index: 0 }));
}

#[test]
fn empty_source_dir_is_rejected() {
    let mut config = Config::default();
    config.scan.source_dirs.push(String::new());
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("scan.source_dirs[4]"));
}

#[test]
fn blank_suite_name_is_rejected() {
    let mut config = Config::default();
    config.harness.suites.push(TestSuite {
        name: "  ".to_string(),
        scripts: Vec::new(),
    });
    assert!(validate_config_semantics(&config).is_err());
}
