use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be **relative**.
///
/// Every file the tool touches lives under the project root, so layout
/// entries must never be absolute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute or climbs out with `..`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            !path.is_absolute(),
            "RelativePath cannot be absolute: {path:?}"
        );
        assert!(
            !escapes(&path),
            "RelativePath cannot contain '..': {path:?}"
        );
        Self(path)
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant. Absolute paths, empty paths and
    /// paths with a `..` component are handed back as the error.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        if path.is_absolute() || path.as_os_str().is_empty() || escapes(&path) {
            Err(path)
        } else {
            Ok(Self(path))
        }
    }

    /// Join a path segment onto this relative path.
    ///
    /// # Panics
    /// Panics if the segment is absolute or contains `..`.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = segment.as_ref();
        assert!(
            !segment.is_absolute() && !escapes(segment),
            "cannot join {segment:?} to RelativePath"
        );
        Self(self.0.join(segment))
    }

    /// `/`-separated form used in summaries, identical on every platform.
    pub fn label(&self) -> String {
        self.0
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Any `..` could lead outside the project root.
fn escapes(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_absolute_and_empty() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("").is_err());
        assert!(RelativePath::try_new("src").is_ok());
    }

    #[test]
    fn rejects_parent_components() {
        assert_eq!(
            RelativePath::try_new("../outside"),
            Err(PathBuf::from("../outside"))
        );
        assert!(RelativePath::try_new("src/../../etc").is_err());
        assert!(RelativePath::try_new("docs/../KATA.md").is_err());
        assert!(RelativePath::try_new("./src").is_ok());
    }

    #[test]
    #[should_panic(expected = "cannot join")]
    fn join_panics_on_parent_segment() {
        let _ = RelativePath::new("src").join("../x.ts");
    }

    #[test]
    fn label_uses_forward_slashes() {
        let p = RelativePath::new("src").join("fizzbuzz.ts");
        assert_eq!(p.label(), "src/fizzbuzz.ts");
        assert_eq!(RelativePath::new("./KATA.md").label(), "KATA.md");
    }

    #[test]
    #[should_panic(expected = "cannot be absolute")]
    fn new_panics_on_absolute() {
        let _ = RelativePath::new("/tmp");
    }
}
