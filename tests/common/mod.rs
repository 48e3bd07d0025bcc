#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// `src/pk_core.c` with a correct cached hash.
pub const CORE_C: &str = "\
#include \"pk_common.h\"

static int builtin_id(unsigned h) {
  switch (h) {
    case CHECK_HASH(\"list_append\", 0xc4dc952e): return 1;
    case CHECK_HASH(\"count\", 0x39b1ddf4): return 2;
  }
  return 0;
}
";

pub const COMMON_H: &str = "#ifndef PK_COMMON_H\n#define PK_COMMON_H\n#endif\n";

/// A config that only checks `src/`, with no hash files and one `src/a.h` / `src/b.h` mirror group.
pub const SRC_ONLY_CONFIG: &str = r#"
[scan]
source_dirs = ["src/"]

[hash]
files = []

[[mirror]]
files = ["src/a.h", "src/b.h"]
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a project that passes the built-in policy.
    pub fn reference_project() -> Self {
        let fixture = Self::new();
        fixture.create_file("src/pk_core.c", CORE_C);
        fixture.create_file("src/pk_var.c", "int pk_var_count;\n");
        fixture.create_file("src/pk_common.h", COMMON_H);
        fixture.create_file("cli/common.h", COMMON_H);
        fixture.create_file("cli/main.c", "int main(void) {\n  return 0;\n}\n");
        fixture.create_file("docs/index.js", "// see https://example.com/a/very/long/url/that/goes/on/and/on/past/the/eighty/char/limit\n");
        fixture.create_file("docs/try/try.py", "print('hi')\n");
        fixture.create_file("docs/README.md", "Not checked.\t\n\n\n");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.style-guard.toml` at the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }
}

/// The diagnostic line for `path`/`line` exactly as printed.
pub fn diagnostic_line(path: &str, line: usize, message: &str) -> String {
    format!("{path:<17} : {line:>4} - {message}\n")
}
