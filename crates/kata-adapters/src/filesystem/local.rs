//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use kata_core::{application::ports::Filesystem, error::KataResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> KataResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KataResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> KataResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> kata_core::error::KataError {
    use kata_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_core::{application::safe_write, domain::WriteOutcome};

    #[test]
    fn safe_write_creates_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("fizzbuzz.ts");
        let fs = LocalFilesystem::new();

        assert_eq!(safe_write(&fs, &path, "first").unwrap(), WriteOutcome::Created);
        assert_eq!(safe_write(&fs, &path, "second").unwrap(), WriteOutcome::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn read_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("index.html"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
