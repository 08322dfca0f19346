use crate::domain::value_objects::{FunctionName, KataName};

/// The validated answers collected during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub kata_name: KataName,
    pub function_name: FunctionName,
    pub description: Option<String>,
    pub dom: bool,
}

impl Session {
    /// An empty description means "no description".
    pub fn new(
        kata_name: KataName,
        function_name: FunctionName,
        description: impl Into<String>,
        dom: bool,
    ) -> Self {
        let description = description.into();
        Self {
            kata_name,
            function_name,
            description: (!description.is_empty()).then_some(description),
            dom,
        }
    }

    pub fn title(&self) -> String {
        self.kata_name.title()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Only a case-insensitive `y` opts in; everything else, including `yes`,
/// is a no.
pub fn parse_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_is_none() {
        let s = Session::new(
            KataName::parse("fizzbuzz").unwrap(),
            FunctionName::parse("fizzbuzz").unwrap(),
            "",
            false,
        );
        assert_eq!(s.description(), None);
        assert_eq!(s.title(), "Fizzbuzz");
    }

    #[test]
    fn whitespace_description_is_kept() {
        let s = Session::new(
            KataName::parse("fizzbuzz").unwrap(),
            FunctionName::parse("fizzbuzz").unwrap(),
            " ",
            false,
        );
        assert_eq!(s.description(), Some(" "));
    }

    #[test]
    fn yes_answers() {
        assert!(parse_yes("y"));
        assert!(parse_yes("Y"));
        for answer in ["", "n", "N", "yes", " y", "no"] {
            assert!(!parse_yes(answer), "treated as yes: {answer:?}");
        }
    }
}
