/// A per-question validation finding.
///
/// At most one finding is reported per question. The `Display` strings are
/// part of the observable contract and reproduce the messages existing
/// consumers expect, byte for byte; they read as predicates of the question
/// ("q1 was not answered").
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// The question was reachable but no answer was present, or the whole
    /// answer set was missing or empty.
    #[error("was not answered")]
    NotAnswered,

    /// An answer was present but its option index is outside the question's
    /// option range.
    #[error("has an answer that is not on the list of valid answers")]
    InvalidAnswer,

    /// An answer was present for a question made unreachable by an earlier
    /// terminal answer.
    #[error("was answered even though a previous response indicated that the questions were complete")]
    AnsweredAfterCompletion,
}
