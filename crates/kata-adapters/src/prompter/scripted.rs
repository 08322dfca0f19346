//! Prompter with canned answers, for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use kata_core::{application::ports::Prompter, error::KataResult};

/// Replays fixed answers and records what was asked.
///
/// Unlike [`super::PipedPrompter`] it prints nothing. Keep a [`Transcript`]
/// handle before boxing the prompter to inspect it after `close`.
#[derive(Debug)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Transcript,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Transcript::default(),
        }
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> KataResult<String> {
        self.transcript.inner.borrow_mut().questions.push(question.to_owned());
        Ok(self.answers.pop_front().unwrap_or_default())
    }

    fn close(self: Box<Self>) {
        self.transcript.inner.borrow_mut().closed += 1;
    }
}

/// Shared record of a [`ScriptedPrompter`]'s activity.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    inner: Rc<RefCell<TranscriptInner>>,
}

#[derive(Debug, Default)]
struct TranscriptInner {
    questions: Vec<String>,
    closed: usize,
}

impl Transcript {
    pub fn questions(&self) -> Vec<String> {
        self.inner.borrow().questions.clone()
    }

    pub fn close_count(&self) -> usize {
        self.inner.borrow().closed
    }
}
