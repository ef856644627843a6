//! Member application questionnaire state.

use crate::Question;
use std::sync::Arc;

/// An in-progress questionnaire for one user.
///
/// The question list is fixed for the lifetime of the application; answers
/// are appended one per inbound private message. `answers.len() == progress`
/// holds at all times, and the application is finished exactly when every
/// question has an answer.
///
/// # Examples
///
/// ```
/// use porter_core::{MemberApplication, Question};
/// use std::sync::Arc;
///
/// let questions: Arc<[Question]> = Arc::from(vec![Question {
///     prompt: "Which country are you from?".into(),
///     label: "Country".into(),
/// }]);
/// let mut application = MemberApplication::new(questions);
/// assert!(!application.finished());
/// application.add_answer("Ruritania");
/// assert!(application.finished());
/// assert_eq!(application.summary(), "Country: Ruritania\n");
/// ```
#[derive(Debug, Clone)]
pub struct MemberApplication {
    questions: Arc<[Question]>,
    progress: usize,
    answers: Vec<String>,
}

impl MemberApplication {
    /// Start a fresh application over the given question list.
    pub fn new(questions: Arc<[Question]>) -> Self {
        Self {
            questions,
            progress: 0,
            answers: Vec::new(),
        }
    }

    /// Human-facing step number, counting from one.
    pub fn step(&self) -> usize {
        (self.progress + 1).min(self.questions.len())
    }

    /// Total number of questions in the questionnaire.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question currently awaiting an answer, or `None` once finished.
    pub fn question(&self) -> Option<&Question> {
        self.questions.get(self.progress)
    }

    /// Whether every question has been answered.
    pub fn finished(&self) -> bool {
        self.progress == self.questions.len()
    }

    /// Register one answer and advance the progress counter.
    ///
    /// Answers past the final question are ignored; callers gate on
    /// [`MemberApplication::finished`] before prompting for more input.
    pub fn add_answer(&mut self, answer: impl Into<String>) {
        if self.finished() {
            return;
        }
        self.answers.push(answer.into());
        self.progress += 1;
    }

    /// Formatted answers, one `label: answer` line per submitted answer in
    /// submission order, with a trailing newline.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (question, answer) in self.questions.iter().zip(&self.answers) {
            out.push_str(&question.label);
            out.push_str(": ");
            out.push_str(answer);
            out.push('\n');
        }
        out
    }
}
