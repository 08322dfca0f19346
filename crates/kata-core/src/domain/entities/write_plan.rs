use std::fmt;

use crate::domain::{
    entities::{common::RelativePath, layout::ProjectLayout, session::Session},
    templates,
};

/// The kinds of file a kata can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Source,
    Test,
    Documentation,
    EntryPoint,
    Stylesheet,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Test => "test",
            Self::Documentation => "documentation",
            Self::EntryPoint => "entry-point",
            Self::Stylesheet => "stylesheet",
        }
    }

    /// Render this artifact's content for a session.
    pub fn render(self, session: &Session) -> String {
        match self {
            Self::Source => templates::render_source(&session.function_name, session.description()),
            Self::Test => templates::render_test(
                &session.function_name,
                &session.kata_name,
                session.description(),
            ),
            Self::Documentation => templates::render_kata_doc(&session.title(), session.description()),
            Self::EntryPoint => templates::render_entry_point(&session.title()),
            Self::Stylesheet => templates::render_stylesheet(),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the plan: which artifact goes where.
///
/// Content is not stored; it is rendered when the step runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub kind: ArtifactKind,
    pub path: RelativePath,
}

impl PlannedWrite {
    pub fn label(&self) -> String {
        self.path.label()
    }
}

/// Ordered list of files to create for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritePlan {
    entries: Vec<PlannedWrite>,
}

impl WritePlan {
    /// Source, test and documentation always; entry point and stylesheet
    /// only when DOM support was requested.
    pub fn for_session(session: &Session, layout: &ProjectLayout) -> Self {
        let name = session.kata_name.as_str();
        let mut entries = vec![
            PlannedWrite {
                kind: ArtifactKind::Source,
                path: layout.source_file(&format!("{name}.ts")),
            },
            PlannedWrite {
                kind: ArtifactKind::Test,
                path: layout.source_file(&format!("{name}.test.ts")),
            },
            PlannedWrite {
                kind: ArtifactKind::Documentation,
                path: layout.doc_file().clone(),
            },
        ];

        if session.dom {
            entries.push(PlannedWrite {
                kind: ArtifactKind::EntryPoint,
                path: layout.source_file("main.ts"),
            });
            entries.push(PlannedWrite {
                kind: ArtifactKind::Stylesheet,
                path: layout.source_file("style.css"),
            });
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[PlannedWrite] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WritePlan {
    type Item = &'a PlannedWrite;
    type IntoIter = std::slice::Iter<'a, PlannedWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FunctionName, KataName};

    fn session(dom: bool) -> Session {
        Session::new(
            KataName::parse("roman-numerals").unwrap(),
            FunctionName::parse("romanNumerals").unwrap(),
            "",
            dom,
        )
    }

    #[test]
    fn plan_without_dom() {
        let plan = WritePlan::for_session(&session(false), &ProjectLayout::new("."));
        let labels: Vec<_> = plan.entries().iter().map(PlannedWrite::label).collect();
        assert_eq!(
            labels,
            ["src/roman-numerals.ts", "src/roman-numerals.test.ts", "KATA.md"]
        );
    }

    #[test]
    fn plan_with_dom_appends_entry_point_and_stylesheet() {
        let plan = WritePlan::for_session(&session(true), &ProjectLayout::new("."));
        assert_eq!(plan.len(), 5);
        let kinds: Vec<_> = plan.into_iter().map(|p| p.kind).collect();
        assert_eq!(kinds[3], ArtifactKind::EntryPoint);
        assert_eq!(kinds[4], ArtifactKind::Stylesheet);
        assert_eq!(plan.entries()[3].label(), "src/main.ts");
        assert_eq!(plan.entries()[4].label(), "src/style.css");
    }

    #[test]
    fn artifacts_render_from_session() {
        let s = session(true);
        assert!(ArtifactKind::Source.render(&s).contains("export function romanNumerals()"));
        assert!(ArtifactKind::Documentation.render(&s).starts_with("# Roman Numerals\n"));
        assert!(ArtifactKind::EntryPoint.render(&s).contains("<h1>Roman Numerals</h1>"));
    }
}
