use serde::Serialize;

/// Result of a single safe write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file already existed and was left alone.
    Skipped,
}

/// What a run did, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub kata: String,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    /// Pre-existing files that were amended (only `index.html` today).
    pub updated: Vec<String>,
}

impl InitReport {
    pub fn new(kata: impl Into<String>) -> Self {
        Self {
            kata: kata.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, label: impl Into<String>, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created.push(label.into()),
            WriteOutcome::Skipped => self.skipped.push(label.into()),
        }
    }

    pub fn record_update(&mut self, label: impl Into<String>) {
        self.updated.push(label.into());
    }

    /// `true` when nothing on disk changed.
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sorts_into_lists() {
        let mut report = InitReport::new("fizzbuzz");
        report.record("src/fizzbuzz.ts", WriteOutcome::Created);
        report.record("KATA.md", WriteOutcome::Skipped);
        assert_eq!(report.created, ["src/fizzbuzz.ts"]);
        assert_eq!(report.skipped, ["KATA.md"]);
        assert!(!report.is_noop());
    }

    #[test]
    fn only_skips_is_noop() {
        let mut report = InitReport::new("fizzbuzz");
        report.record("KATA.md", WriteOutcome::Skipped);
        assert!(report.is_noop());
    }
}
