use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::FileSystem;

/// In-memory filesystem keyed by normalized `/`-separated paths.
pub struct MockFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: Vec<PathBuf>,
    current_dir: PathBuf,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            dirs: Vec::new(),
            current_dir: PathBuf::from("/project"),
        }
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.with_bytes(path, content.as_bytes())
    }

    pub fn with_bytes(mut self, path: impl AsRef<Path>, content: &[u8]) -> Self {
        let path = normalize_path(path.as_ref());
        if let Some(parent) = path.parent() {
            self.dirs.push(parent.to_path_buf());
        }
        self.files.insert(path, content.to_vec());
        self
    }

    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(normalize_path(path.as_ref()));
        self
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        self.files
            .get(&normalize_path(path))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let dir = normalize_path(dir);
        if !self.dirs.contains(&dir) {
            return Err(Error::new(ErrorKind::NotFound, "directory not found"));
        }
        // BTreeMap keys are already in file-name order within one directory.
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir.as_path()))
            .cloned()
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        let path = normalize_path(path);
        self.files.contains_key(&path) || self.dirs.contains(&path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            ".." => {
                components.pop();
            }
            "." | "" => {}
            _ => components.push(part),
        }
    }
    let normalized = if path_str.starts_with('/') {
        format!("/{}", components.join("/"))
    } else {
        components.join("/")
    };
    PathBuf::from(normalized)
}
