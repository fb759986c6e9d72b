//! Integration tests for craq-validator

use craq_validator::{
    AnswerError, AnswerSource, Answers, Choice, Question, QuestionKey, Questionnaire, TestSource,
    validate, validate_from,
};

fn yes_no(ask: &str) -> Question {
    Question::new(ask, vec![Choice::new("Yes"), Choice::new("No")])
}

/// Screening shape: the first question's second option ends the questionnaire.
fn screening() -> Questionnaire {
    Questionnaire::new(vec![
        Question::new(
            "Do you currently feel any pain?",
            vec![Choice::new("Yes"), Choice::terminal("No")],
        ),
        Question::new(
            "Where does it hurt?",
            vec![
                Choice::new("Head"),
                Choice::new("Back"),
                Choice::new("Elsewhere"),
            ],
        ),
    ])
}

#[test]
fn test_all_questions_answered_in_range() {
    // Two questions, no terminal options, both answered in range.
    let questionnaire = Questionnaire::new(vec![yes_no("a"), yes_no("b")]);
    let answers = Answers::from_iter([(QuestionKey::new(0), 0), (QuestionKey::new(1), 1)]);

    let report = validate(&questionnaire, Some(&answers));

    assert!(report.is_valid());
    assert!(report.errors().is_empty());
}

#[test]
fn test_reachable_question_skipped() {
    // q1 unanswered while q0's answer is not terminal.
    let questionnaire = Questionnaire::new(vec![yes_no("a"), yes_no("b")]);
    let answers = Answers::from_iter([(QuestionKey::new(0), 0)]);

    let report = validate(&questionnaire, Some(&answers));

    assert!(!report.is_valid());
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.error_for(QuestionKey::new(1)),
        Some(AnswerError::NotAnswered)
    );
}

#[test]
fn test_answer_after_terminal_answer() {
    // q0's selected option is terminal, yet q1 was answered.
    let questionnaire = Questionnaire::new(vec![
        Question::new("done?", vec![Choice::terminal("Yes"), Choice::new("No")]),
        yes_no("b"),
    ]);
    let answers = Answers::from_iter([(QuestionKey::new(0), 0), (QuestionKey::new(1), 0)]);

    let report = validate(&questionnaire, Some(&answers));

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.error_for(QuestionKey::new(1)),
        Some(AnswerError::AnsweredAfterCompletion)
    );
}

#[test]
fn test_out_of_range_selection() {
    // One question with two options, answered with index 5.
    let questionnaire = Questionnaire::new(vec![yes_no("a")]);
    let answers = Answers::from_iter([(QuestionKey::new(0), 5)]);

    let report = validate(&questionnaire, Some(&answers));

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.error_for(QuestionKey::new(0)),
        Some(AnswerError::InvalidAnswer)
    );
}

#[test]
fn test_absent_answer_set_marks_all_questions() {
    // No answer set at all, three questions.
    let questionnaire = Questionnaire::new(vec![yes_no("a"), yes_no("b"), yes_no("c")]);

    let report = validate(&questionnaire, None);

    assert_eq!(report.len(), 3);
    for key in questionnaire.keys() {
        assert_eq!(report.error_for(key), Some(AnswerError::NotAnswered));
    }
}

#[test]
fn test_empty_answer_set_matches_absent_one() {
    // None and Some(empty) report identically, regardless of content.
    let questionnaire = screening();

    let from_absent = validate(&questionnaire, None);
    let from_empty = validate(&questionnaire, Some(&Answers::new()));

    assert_eq!(from_absent, from_empty);
    assert_eq!(from_absent.len(), questionnaire.len());
}

#[test]
fn test_terminal_answer_short_circuits_the_rest() {
    // After a terminal answer, unanswered questions produce no finding
    // and answered ones always fail.
    let questionnaire = Questionnaire::new(vec![
        Question::new("screen", vec![Choice::terminal("none apply")]),
        yes_no("b"),
        yes_no("c"),
        yes_no("d"),
    ]);

    let complete = Answers::from_iter([(QuestionKey::new(0), 0)]);
    assert!(validate(&questionnaire, Some(&complete)).is_valid());

    let overshoot = Answers::from_iter([(QuestionKey::new(0), 0), (QuestionKey::new(3), 1)]);
    let report = validate(&questionnaire, Some(&overshoot));
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.error_for(QuestionKey::new(3)),
        Some(AnswerError::AnsweredAfterCompletion)
    );
}

#[test]
fn test_selection_range_bounds() {
    // For m options, m and -1 are rejected, 0..m-1 accepted.
    let questionnaire = Questionnaire::new(vec![Question::new(
        "pick",
        vec![Choice::new("a"), Choice::new("b"), Choice::new("c")],
    )]);

    for valid in [0, 1, 2] {
        let answers = Answers::from_iter([(QuestionKey::new(0), valid)]);
        assert!(
            validate(&questionnaire, Some(&answers)).is_valid(),
            "selection {valid} should be accepted"
        );
    }
    for invalid in [-1, 3] {
        let answers = Answers::from_iter([(QuestionKey::new(0), invalid)]);
        assert_eq!(
            validate(&questionnaire, Some(&answers)).error_for(QuestionKey::new(0)),
            Some(AnswerError::InvalidAnswer),
            "selection {invalid} should be rejected"
        );
    }
}

#[test]
fn test_error_messages_are_stable() {
    // The rendered messages are part of the observable contract.
    assert_eq!(AnswerError::NotAnswered.to_string(), "was not answered");
    assert_eq!(
        AnswerError::InvalidAnswer.to_string(),
        "has an answer that is not on the list of valid answers"
    );
    assert_eq!(
        AnswerError::AnsweredAfterCompletion.to_string(),
        "was answered even though a previous response indicated that the questions were complete"
    );
}

#[test]
fn test_report_renders_with_keys() {
    let questionnaire = screening();
    let report = validate(&questionnaire, None);

    let rendered: Vec<String> = report
        .sorted()
        .into_iter()
        .map(|(key, error)| format!("{key} {error}"))
        .collect();

    assert_eq!(
        rendered,
        vec!["q0 was not answered", "q1 was not answered"]
    );
}

#[test]
fn test_validate_from_test_source() {
    let questionnaire = screening();

    let source = TestSource::new().with_answer(QuestionKey::new(0), 1);
    let report = validate_from(&questionnaire, &source).unwrap();
    assert!(report.is_valid());

    let report = validate_from(&questionnaire, &TestSource::absent()).unwrap();
    assert_eq!(report.len(), questionnaire.len());
}

#[test]
fn test_validate_from_failing_source() {
    struct BrokenSource;

    impl AnswerSource for BrokenSource {
        type Error = anyhow::Error;

        fn collect(&self, _questionnaire: &Questionnaire) -> Result<Option<Answers>, Self::Error> {
            Err(anyhow::anyhow!("submission store unavailable"))
        }
    }

    let error = validate_from(&screening(), &BrokenSource).unwrap_err();
    assert!(error.to_string().contains("submission store unavailable"));
}
