//! Prompter for non-interactive stdin.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use kata_core::{
    application::{ApplicationError, ports::Prompter},
    error::KataResult,
};

/// Answers questions from piped input, one line per question.
///
/// All input is read on the first `ask`, so the whole answer script is
/// buffered before anything is printed. Every question is echoed together
/// with the answer it consumed, which keeps a replayed session readable:
///
/// ```text
/// Kata name (e.g., "fizzbuzz"): fizzbuzz
/// ```
///
/// Once the input runs out every further answer is the empty string.
pub struct PipedPrompter<R, W> {
    input: R,
    output: W,
    lines: Option<VecDeque<String>>,
}

impl<R: BufRead, W: Write> PipedPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            lines: None,
        }
    }

    /// Give back the echo sink (testing helper).
    pub fn into_output(self) -> W {
        self.output
    }

    fn buffered(&mut self) -> KataResult<&mut VecDeque<String>> {
        let lines = match self.lines.take() {
            Some(lines) => lines,
            None => {
                let lines = (&mut self.input)
                    .lines()
                    .collect::<io::Result<VecDeque<_>>>()
                    .map_err(|e| ApplicationError::PromptFailed {
                        reason: format!("could not read piped input: {e}"),
                    })?;
                debug!(lines = lines.len(), "Buffered piped answers");
                lines
            }
        };
        Ok(self.lines.insert(lines))
    }
}

impl<R: BufRead, W: Write> Prompter for PipedPrompter<R, W> {
    fn ask(&mut self, question: &str) -> KataResult<String> {
        let answer = self.buffered()?.pop_front().unwrap_or_default();

        writeln!(self.output, "{question}: {answer}")
            .and_then(|()| self.output.flush())
            .map_err(|e| ApplicationError::PromptFailed {
                reason: format!("could not echo prompt: {e}"),
            })?;

        Ok(answer)
    }

    fn close(mut self: Box<Self>) {
        if let Some(rest) = self.lines.as_ref().filter(|l| !l.is_empty()) {
            debug!(unused = rest.len(), "Piped input had unused lines");
        }
        if let Err(e) = self.output.flush() {
            warn!(error = %e, "Failed to flush prompt output");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &'static str) -> PipedPrompter<Cursor<&'static [u8]>, Vec<u8>> {
        PipedPrompter::new(Cursor::new(input.as_bytes()), Vec::new())
    }

    #[test]
    fn answers_in_order_and_echoes() {
        let mut p = prompter("fizzbuzz\n\nFizzBuzz kata\nn\n");
        assert_eq!(p.ask("Kata name").unwrap(), "fizzbuzz");
        assert_eq!(p.ask("Function name").unwrap(), "");
        assert_eq!(p.ask("Description").unwrap(), "FizzBuzz kata");
        assert_eq!(p.ask("DOM").unwrap(), "n");

        let echoed = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(
            echoed,
            "Kata name: fizzbuzz\nFunction name: \nDescription: FizzBuzz kata\nDOM: n\n"
        );
    }

    #[test]
    fn exhausted_input_answers_empty() {
        let mut p = prompter("only-one");
        assert_eq!(p.ask("a").unwrap(), "only-one");
        assert_eq!(p.ask("b").unwrap(), "");
        assert_eq!(p.ask("c").unwrap(), "");
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let mut p = prompter("roman-numerals\r\ny\r\n");
        assert_eq!(p.ask("a").unwrap(), "roman-numerals");
        assert_eq!(p.ask("b").unwrap(), "y");
    }

    #[test]
    fn invalid_utf8_is_a_prompt_error() {
        let mut p = PipedPrompter::new(Cursor::new(&[0xff, 0xfe, b'\n'][..]), Vec::new());
        let err = p.ask("a").unwrap_err();
        assert!(err.to_string().contains("could not read piped input"));
    }

    #[test]
    fn close_consumes_boxed_prompter() {
        let p: Box<dyn Prompter> = Box::new(prompter("x\n"));
        p.close();
    }
}
