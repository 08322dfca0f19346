//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.

use crate::error::KataResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kata_adapters::filesystem::LocalFilesystem` (production)
/// - `kata_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KataResult<()>;

    /// Write content to a file, replacing whatever is there.
    ///
    /// The "never overwrite" rule is enforced by `safe_write`, not here;
    /// the `index.html` rewrite relies on this replacing the file.
    fn write_file(&self, path: &Path, content: &str) -> KataResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> KataResult<String>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `kata_adapters::prompter::PipedPrompter` (stdin is not a terminal)
/// - `kata_adapters::prompter::ScriptedPrompter` (testing)
/// - the terminal prompter in `kata-cli` (interactive sessions)
pub trait Prompter {
    /// Show `question` and return the answer line, without its newline.
    fn ask(&mut self, question: &str) -> KataResult<String>;

    /// Release the input stream. Consumes the prompter, so it runs once.
    fn close(self: Box<Self>);
}
