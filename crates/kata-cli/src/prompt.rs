//! Picks how questions are asked.
//!
//! A terminal on stdin gets line-edited prompts (behind the `interactive`
//! feature). Anything else is read as a script, one answer per line, and
//! each question is echoed with the answer it consumed.

use std::io::{self, IsTerminal};

use tracing::debug;

use kata_adapters::PipedPrompter;
use kata_core::application::ports::Prompter;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::error::CliResult;

/// Choose the prompter for this process.
pub fn select_prompter(global: &GlobalArgs) -> CliResult<Box<dyn Prompter>> {
    if io::stdin().is_terminal() {
        #[cfg(feature = "interactive")]
        {
            debug!("stdin is a terminal, prompting interactively");
            return Ok(Box::new(terminal::TerminalPrompter::stderr()));
        }

        #[cfg(not(feature = "interactive"))]
        {
            return Err(crate::error::CliError::FeatureNotAvailable {
                feature: "interactive",
            });
        }
    }

    debug!("stdin is not a terminal, reading piped answers");
    let stdin = io::stdin().lock();
    let prompter: Box<dyn Prompter> = match echo_target(global) {
        EchoTarget::Stdout => Box::new(PipedPrompter::new(stdin, io::stdout())),
        EchoTarget::Stderr => Box::new(PipedPrompter::new(stdin, io::stderr())),
        EchoTarget::Discard => Box::new(PipedPrompter::new(stdin, io::sink())),
    };
    Ok(prompter)
}

/// Where the piped transcript goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EchoTarget {
    Stdout,
    /// stdout is reserved for the JSON report.
    Stderr,
    Discard,
}

fn echo_target(global: &GlobalArgs) -> EchoTarget {
    if global.quiet {
        EchoTarget::Discard
    } else if global.output_format == OutputFormat::Json {
        EchoTarget::Stderr
    } else {
        EchoTarget::Stdout
    }
}

#[cfg(feature = "interactive")]
mod terminal {
    use std::io::ErrorKind;

    use console::Term;
    use dialoguer::{Error as DialoguerError, Input};
    use tracing::warn;

    use kata_core::{
        application::{ApplicationError, ports::Prompter},
        error::KataResult,
    };

    /// Line-edited prompts on the controlling terminal.
    pub struct TerminalPrompter {
        term: Term,
    }

    impl TerminalPrompter {
        pub fn stderr() -> Self {
            Self {
                term: Term::stderr(),
            }
        }
    }

    impl Prompter for TerminalPrompter {
        fn ask(&mut self, question: &str) -> KataResult<String> {
            let answer = Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text_on(&self.term);

            match answer {
                Ok(value) => Ok(value),
                Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                    Err(ApplicationError::Cancelled.into())
                }
                Err(err) => Err(ApplicationError::PromptFailed {
                    reason: err.to_string(),
                }
                .into()),
            }
        }

        fn close(self: Box<Self>) {
            if let Err(e) = self.term.show_cursor() {
                warn!("Failed to restore terminal cursor: {e}");
            }
        }
    }
}
