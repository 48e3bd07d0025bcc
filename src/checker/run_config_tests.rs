use std::path::PathBuf;

use crate::config::MirrorGroup;

use super::*;

#[test]
fn default_is_reference_policy() {
    let config = RunConfiguration::default();

    assert_eq!(
        config.source_directories,
        vec![
            PathBuf::from("src/"),
            PathBuf::from("cli/"),
            PathBuf::from("docs/"),
            PathBuf::from("docs/try/"),
        ]
    );
    assert_eq!(config.checked_extensions, vec![".c", ".h", ".py", ".pk", ".js"]);
    assert_eq!(config.line_length_threshold, 80);
    assert_eq!(
        config.mirrored_header_groups,
        vec![vec![PathBuf::from("src/pk_common.h"), PathBuf::from("cli/common.h")]]
    );
}

#[test]
fn mirror_group_order_is_preserved() {
    let config = Config {
        mirrors: vec![MirrorGroup {
            files: vec!["a.h".to_string(), "c.h".to_string(), "b.h".to_string()],
        }],
        ..Config::default()
    };

    let run = RunConfiguration::from(&config);

    assert_eq!(
        run.mirrored_header_groups[0],
        vec![PathBuf::from("a.h"), PathBuf::from("c.h"), PathBuf::from("b.h")]
    );
}
