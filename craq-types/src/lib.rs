//! Core types for the craq-validator crate.
//!
//! This crate provides the foundational types for describing
//! conditional-branching questionnaires and their submitted answers:
//! - `Questionnaire`, `Question`, and `Choice` - the ordered question
//!   definitions, including the complete-if-selected flag
//! - `QuestionKey` - the typed position-derived key joining questions,
//!   answers, and validation findings
//! - `Answers` - a submitted answer set
//! - `AnswerError` - the per-question validation findings

mod question_key;
pub use question_key::{ParseKeyError, QuestionKey};

mod question;
pub use question::{Choice, Question};

mod questionnaire;
pub use questionnaire::Questionnaire;

mod answers;
pub use answers::Answers;

mod error;
pub use error::AnswerError;
