use std::path::PathBuf;

use crate::domain::entities::common::RelativePath;

/// Where a kata's files go inside the project.
///
/// `root` is the project directory; everything else is relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    source_dir: RelativePath,
    doc_file: RelativePath,
    index_html: RelativePath,
}

impl ProjectLayout {
    /// Standard layout of the skeleton: `src/`, `KATA.md`, `index.html`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_dir: RelativePath::new("src"),
            doc_file: RelativePath::new("KATA.md"),
            index_html: RelativePath::new("index.html"),
        }
    }

    pub fn with_source_dir(mut self, dir: RelativePath) -> Self {
        self.source_dir = dir;
        self
    }

    pub fn with_doc_file(mut self, file: RelativePath) -> Self {
        self.doc_file = file;
        self
    }

    pub fn with_index_html(mut self, file: RelativePath) -> Self {
        self.index_html = file;
        self
    }

    /// A file directly inside the source directory.
    pub fn source_file(&self, file_name: &str) -> RelativePath {
        self.source_dir.join(file_name)
    }

    pub fn doc_file(&self) -> &RelativePath {
        &self.doc_file
    }

    pub fn index_html(&self) -> &RelativePath {
        &self.index_html
    }

    /// Absolute (or root-relative) location of a layout entry.
    pub fn resolve(&self, path: &RelativePath) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_skeleton() {
        let layout = ProjectLayout::new("/work/katas");
        assert_eq!(layout.source_file("fizzbuzz.ts").label(), "src/fizzbuzz.ts");
        assert_eq!(layout.doc_file().label(), "KATA.md");
        assert_eq!(
            layout.resolve(layout.index_html()),
            PathBuf::from("/work/katas/index.html")
        );
    }

    #[test]
    fn overrides_apply() {
        let layout = ProjectLayout::new(".")
            .with_source_dir(RelativePath::new("lib"))
            .with_doc_file(RelativePath::new("docs/KATA.md"));
        assert_eq!(layout.source_file("a.ts").label(), "lib/a.ts");
        assert_eq!(layout.doc_file().label(), "docs/KATA.md");
    }
}
