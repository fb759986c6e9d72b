//! Answer sources for driving validation without a live submission channel.
//!
//! An [`AnswerSource`] produces the answer set for a questionnaire; sources
//! decide where answers come from (a parsed submission, a form payload, a
//! test fixture). [`TestSource`] returns pre-configured answers, which is
//! useful for testing questionnaire flows programmatically.
//!
//! # Example
//!
//! ```rust
//! use craq_validator::{Choice, Question, QuestionKey, Questionnaire, TestSource, validate_from};
//!
//! let questionnaire = Questionnaire::new(vec![Question::new(
//!     "Continue?",
//!     vec![Choice::new("Yes"), Choice::terminal("No")],
//! )]);
//!
//! let source = TestSource::new().with_answer(QuestionKey::new(0), 1);
//! let report = validate_from(&questionnaire, &source).unwrap();
//! assert!(report.is_valid());
//! ```

use craq_types::{Answers, QuestionKey, Questionnaire};

use crate::{ValidationReport, validate};

/// Trait for implementations that produce an answer set for a questionnaire.
///
/// Returning `Ok(None)` means no answer set was submitted at all; the
/// validator reports that uniformly. Errors are reserved for the source's
/// own failures (transport, decoding), never for invalid answers.
pub trait AnswerSource {
    /// The error type for this source.
    type Error: Into<anyhow::Error>;

    /// Produce the answer set for a questionnaire.
    fn collect(&self, questionnaire: &Questionnaire) -> Result<Option<Answers>, Self::Error>;
}

/// Error returned when an [`AnswerSource`] fails to produce an answer set.
#[derive(Debug, thiserror::Error)]
#[error("failed to collect answers: {0}")]
pub struct CollectError(#[from] anyhow::Error);

/// Collect answers from a source and validate them in one step.
pub fn validate_from<S: AnswerSource>(
    questionnaire: &Questionnaire,
    source: &S,
) -> Result<ValidationReport, CollectError> {
    let answers = source
        .collect(questionnaire)
        .map_err(|error| CollectError(error.into()))?;
    Ok(validate(questionnaire, answers.as_ref()))
}

/// A source that returns pre-configured answers.
#[derive(Debug, Clone)]
pub struct TestSource {
    answers: Option<Answers>,
}

impl TestSource {
    /// Create a source with an empty answer set.
    pub fn new() -> Self {
        Self {
            answers: Some(Answers::new()),
        }
    }

    /// Create a source that reports no submission at all.
    pub fn absent() -> Self {
        Self { answers: None }
    }

    /// Add an answer for a question.
    pub fn with_answer(mut self, key: impl Into<QuestionKey>, selection: i64) -> Self {
        self.answers
            .get_or_insert_with(Answers::new)
            .insert(key, selection);
        self
    }
}

impl Default for TestSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for TestSource {
    type Error = std::convert::Infallible;

    fn collect(&self, _questionnaire: &Questionnaire) -> Result<Option<Answers>, Self::Error> {
        Ok(self.answers.clone())
    }
}
