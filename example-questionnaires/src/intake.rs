use craq_validator::{Choice, Question, Questionnaire};

/// A follow-up intake questionnaire without terminal options.
///
/// Every question must be answered; there is no gate that lets a respondent
/// finish early.
pub fn follow_up_intake() -> Questionnaire {
    Questionnaire::new(vec![
        Question::new(
            "How would you rate your overall health today?",
            vec![
                Choice::new("Poor"),
                Choice::new("Fair"),
                Choice::new("Good"),
                Choice::new("Excellent"),
            ],
        ),
        Question::new(
            "Since your last visit, has your condition changed?",
            vec![
                Choice::new("Improved"),
                Choice::new("Unchanged"),
                Choice::new("Worsened"),
            ],
        ),
        Question::new(
            "Would you like a nurse to call you about these answers?",
            vec![Choice::new("Yes"), Choice::new("No")],
        ),
    ])
}
