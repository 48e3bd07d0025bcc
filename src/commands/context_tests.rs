use std::fs;

use tempfile::TempDir;

use crate::filesystem::RealFileSystem;
use crate::filesystem::mock::MockFileSystem;

use super::*;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_uses_builtin_policy() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".style-guard.toml"), "[lines]\nthreshold = 100\n").unwrap();

    let config = load_config(tmp.path(), None, true).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_config_reads_project_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".style-guard.toml"), "[lines]\nthreshold = 100\n").unwrap();

    let config = load_config(tmp.path(), None, false).unwrap();

    assert_eq!(config.lines.threshold, 100);
}

#[test]
fn load_config_without_file_falls_back_to_default() {
    let tmp = TempDir::new().unwrap();

    let config = load_config(tmp.path(), None, false).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_config_explicit_path() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("custom.toml");
    fs::write(&custom, "[hash]\nfiles = []\n").unwrap();

    let config = load_config(tmp.path(), Some(&custom), false).unwrap();

    assert!(config.hash.files.is_empty());
}

#[test]
fn load_config_explicit_missing_path_is_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.toml");

    let result = load_config(tmp.path(), Some(&missing), false);

    assert!(matches!(
        result,
        Err(crate::StyleGuardError::FileRead { .. })
    ));
}

#[test]
fn resolve_root_explicit_wins() {
    let tmp = TempDir::new().unwrap();

    let root = resolve_root(&RealFileSystem, Some(tmp.path())).unwrap();

    assert_eq!(root, dunce::canonicalize(tmp.path()).unwrap());
}

#[test]
fn resolve_root_discovers_from_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".style-guard.toml"), "").unwrap();
    let nested = tmp.path().join("src").join("core");
    fs::create_dir_all(&nested).unwrap();
    let mock = MockFileSystem::new().with_current_dir(&nested);

    let root = resolve_root(&mock, None).unwrap();

    assert_eq!(root, dunce::canonicalize(tmp.path()).unwrap());
}
