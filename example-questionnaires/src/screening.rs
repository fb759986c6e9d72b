use craq_validator::{Choice, Question, Questionnaire};

/// A short pain-screening questionnaire.
///
/// The first question gates the rest: answering "No" completes the
/// questionnaire, so a pain-free respondent leaves the remaining questions
/// unanswered.
pub fn pain_screening() -> Questionnaire {
    Questionnaire::new(vec![
        Question::new(
            "Do you currently feel any pain?",
            vec![Choice::new("Yes"), Choice::terminal("No")],
        ),
        Question::new(
            "Where do you feel the pain?",
            vec![
                Choice::new("Head or neck"),
                Choice::new("Back"),
                Choice::new("Joints"),
                Choice::new("Elsewhere"),
            ],
        ),
        Question::new(
            "How intense is the pain on a scale of mild to severe?",
            vec![
                Choice::new("Mild"),
                Choice::new("Moderate"),
                Choice::new("Severe"),
            ],
        ),
    ])
}

/// A medication check with a mid-questionnaire gate.
///
/// Question 1 carries the terminal option: respondents who take no
/// medication are done after it, while both of its other options lead on to
/// the interaction question.
pub fn medication_check() -> Questionnaire {
    Questionnaire::new(vec![
        Question::new(
            "Have you visited a doctor in the last twelve months?",
            vec![Choice::new("Yes"), Choice::new("No")],
        ),
        Question::new(
            "How many prescribed medications do you currently take?",
            vec![
                Choice::terminal("None"),
                Choice::new("One or two"),
                Choice::new("Three or more"),
            ],
        ),
        Question::new(
            "Has a pharmacist reviewed your medications for interactions?",
            vec![Choice::new("Yes"), Choice::new("No"), Choice::new("Not sure")],
        ),
    ])
}
