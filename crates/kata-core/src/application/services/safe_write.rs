//! Create-only file writes.

use std::path::Path;

use tracing::{debug, trace};

use crate::{application::ports::Filesystem, domain::WriteOutcome, error::KataResult};

/// Write `content` to `path` unless something already exists there.
///
/// Missing parent directories are created first. The existence check and
/// the write are two separate operations; a file appearing in between is
/// overwritten. The tool is a short-lived foreground process with no other
/// writers, so that window is accepted.
pub fn safe_write(fs: &dyn Filesystem, path: &Path, content: &str) -> KataResult<WriteOutcome> {
    if fs.exists(path) {
        debug!(path = %path.display(), "File exists, skipping");
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !fs.exists(parent) {
            trace!(dir = %parent.display(), "Creating parent directory");
            fs.create_dir_all(parent)?;
        }
    }

    fs.write_file(path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "File created");
    Ok(WriteOutcome::Created)
}
