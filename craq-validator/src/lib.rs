//! # craq-validator
//!
//! Validate submitted answer sets against conditional-branching
//! questionnaires (CRAQ-style screening surveys). Source-agnostic.
//!
//! A questionnaire is an ordered list of questions, each with an ordered
//! list of options. An option may be flagged as completing the questionnaire
//! when selected: from the next question onward, nothing may be answered.
//! Validation walks the questions once and reports at most one finding per
//! question; a missing or empty answer set is itself a normal validation
//! outcome, never an error of the validator.
//!
//! ## Usage
//!
//! ```rust
//! use craq_validator::{Answers, Choice, Question, QuestionKey, Questionnaire, validate};
//!
//! let questionnaire = Questionnaire::new(vec![
//!     Question::new(
//!         "Do you currently feel any pain?",
//!         vec![Choice::new("Yes"), Choice::terminal("No")],
//!     ),
//!     Question::new(
//!         "Where does it hurt?",
//!         vec![Choice::new("Head"), Choice::new("Back"), Choice::new("Elsewhere")],
//!     ),
//! ]);
//!
//! // "No" completes the questionnaire, so the second question stays unanswered.
//! let mut answers = Answers::new();
//! answers.insert(QuestionKey::new(0), 1);
//!
//! let report = validate(&questionnaire, Some(&answers));
//! assert!(report.is_valid());
//! ```
//!
//! ## Findings
//!
//! - [`AnswerError::NotAnswered`] - a reachable question has no answer, or
//!   the whole answer set is missing or empty
//! - [`AnswerError::InvalidAnswer`] - an answer's option index is out of
//!   range for its question
//! - [`AnswerError::AnsweredAfterCompletion`] - an answer was given for a
//!   question made unreachable by an earlier terminal answer
//!
//! ## Sources
//!
//! Answer sets can reach the validator through the [`AnswerSource`] trait;
//! the bundled [`TestSource`] drives the pipeline from pre-configured
//! answers without a live submission channel.

// Re-export all types from craq-types
pub use craq_types::*;

mod report;
pub use report::ValidationReport;

mod validator;
pub use validator::validate;

// Answer sources for driving validation without a live submission channel
mod source;
pub use source::{AnswerSource, CollectError, TestSource, validate_from};
