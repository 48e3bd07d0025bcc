use crate::config::TestSuite;
use crate::filesystem::mock::MockFileSystem;
use crate::harness::ScriptOutcome;

use super::*;

struct ExitCodeRunner(i32);

impl ScriptRunner for ExitCodeRunner {
    fn run(&self, _interpreter: &Path, _script: &Path) -> Result<ScriptOutcome> {
        Ok(ScriptOutcome {
            exit_code: Some(self.0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

fn single_suite_config() -> Config {
    let mut config = Config::default();
    config.harness.suites = vec![TestSuite {
        name: "Smoke".to_string(),
        scripts: vec!["smoke.pk".to_string()],
    }];
    config
}

#[test]
fn explicit_interpreter_overrides_table() {
    let fs = MockFileSystem::new().with_file("/opt/pocket", "");

    let path = select_interpreter(
        &fs,
        Path::new("/project"),
        &Config::default(),
        Some(Path::new("/opt/pocket")),
        "plan9",
    )
    .unwrap();

    assert_eq!(path, PathBuf::from("/opt/pocket"));
}

#[test]
fn explicit_interpreter_must_exist() {
    let fs = MockFileSystem::new();

    let result = select_interpreter(
        &fs,
        Path::new("/project"),
        &Config::default(),
        Some(Path::new("/opt/pocket")),
        "linux",
    );

    assert!(matches!(result, Err(StyleGuardError::InterpreterNotFound(_))));
}

#[test]
fn table_lookup_for_platform() {
    let fs = MockFileSystem::new().with_file("/project/build/debug/pocket", "");

    let path = select_interpreter(&fs, Path::new("/project"), &Config::default(), None, "linux")
        .unwrap();

    assert_eq!(path, Path::new("/project").join("build/debug/pocket"));
}

#[test]
fn unsupported_platform_is_fatal() {
    let fs = MockFileSystem::new();

    let result = select_interpreter(&fs, Path::new("/project"), &Config::default(), None, "plan9");

    assert!(matches!(result, Err(StyleGuardError::UnsupportedPlatform(os)) if os == "plan9"));
}

#[test]
fn passing_suites_exit_zero() {
    let mut out = Vec::new();

    let code = run_suites(
        ExitCodeRunner(0),
        PathBuf::from("pocket"),
        Path::new("/project"),
        &single_suite_config(),
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert!(String::from_utf8(out).unwrap().contains("-- PASSED"));
}

#[test]
fn failing_script_exits_one() {
    let mut out = Vec::new();

    let code = run_suites(
        ExitCodeRunner(70),
        PathBuf::from("pocket"),
        Path::new("/project"),
        &single_suite_config(),
        false,
        &mut out,
    )
    .unwrap();

    assert_eq!(code, EXIT_FAILURE);
    assert!(String::from_utf8(out).unwrap().contains("-- Failed"));
}
