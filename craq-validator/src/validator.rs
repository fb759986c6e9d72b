use craq_types::{AnswerError, Answers, QuestionKey, Questionnaire};

use crate::ValidationReport;

/// Validate a submitted answer set against a questionnaire.
///
/// A wholly absent (`None`) or empty answer set marks every question
/// [`AnswerError::NotAnswered`]; the per-question pass never runs. Otherwise
/// the questions are walked once in position order, tracking whether an
/// earlier answer already completed the questionnaire, and each question is
/// classified by the pair (completed, answered):
///
/// - completed and answered: [`AnswerError::AnsweredAfterCompletion`]
/// - not completed and answered: valid if the selection is in range, which
///   may record completion from the selected option's flag; otherwise
///   [`AnswerError::InvalidAnswer`]
/// - not completed and unanswered: [`AnswerError::NotAnswered`]
/// - completed and unanswered: no finding, the question is unreachable
///
/// Completion applies from the next question onward and is never reset.
/// The completion check precedes the range check, so a single question never
/// reports both an out-of-range answer and an answer-after-completion.
///
/// The function is pure: no I/O, no mutation of its inputs, no panics.
pub fn validate(questionnaire: &Questionnaire, answers: Option<&Answers>) -> ValidationReport {
    match answers {
        None => all_unanswered(questionnaire),
        Some(answers) if answers.is_empty() => all_unanswered(questionnaire),
        Some(answers) => classify_each(questionnaire, answers),
    }
}

fn all_unanswered(questionnaire: &Questionnaire) -> ValidationReport {
    let mut report = ValidationReport::new();
    for key in questionnaire.keys() {
        report.insert(key, AnswerError::NotAnswered);
    }
    report
}

/// Walk the questions in position order, folding the report together with
/// the completed flag. The flag is written only in the (not completed,
/// answered, in range) arm, so a recorded completion is never reset.
fn classify_each(questionnaire: &Questionnaire, answers: &Answers) -> ValidationReport {
    let (report, _completed) = questionnaire.questions().iter().enumerate().fold(
        (ValidationReport::new(), false),
        |(mut report, completed), (position, question)| {
            let key = QuestionKey::new(position);
            match (completed, answers.get(key)) {
                (true, Some(_)) => {
                    report.insert(key, AnswerError::AnsweredAfterCompletion);
                    (report, completed)
                }
                (false, Some(selection)) => match question.choice_at(selection) {
                    Some(choice) => (report, choice.completes_questionnaire()),
                    None => {
                        report.insert(key, AnswerError::InvalidAnswer);
                        (report, completed)
                    }
                },
                (false, None) => {
                    report.insert(key, AnswerError::NotAnswered);
                    (report, completed)
                }
                (true, None) => (report, completed),
            }
        },
    );
    report
}
