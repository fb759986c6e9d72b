/// A selectable option within a question.
///
/// Options are identified by their zero-based position in the question's
/// option list. An option flagged complete-if-selected ends the questionnaire
/// when chosen: no later question may be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The option text shown to the respondent.
    text: String,

    /// Whether choosing this option completes the questionnaire.
    complete_if_selected: bool,
}

impl Choice {
    /// Create a plain option.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete_if_selected: false,
        }
    }

    /// Create an option that completes the questionnaire when selected.
    pub fn terminal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete_if_selected: true,
        }
    }

    /// Get the option text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether choosing this option completes the questionnaire.
    pub fn completes_questionnaire(&self) -> bool {
        self.complete_if_selected
    }
}

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt text shown to the respondent.
    ask: String,

    /// The selectable options, in presentation order.
    choices: Vec<Choice>,
}

impl Question {
    /// Create a new question.
    pub fn new(ask: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            ask: ask.into(),
            choices,
        }
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }

    /// Get the options.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Get the number of options.
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Look up the option a stored answer selects.
    ///
    /// Selections outside `[0, choice_count)`, including negative ones,
    /// yield `None`.
    pub fn choice_at(&self, selection: i64) -> Option<&Choice> {
        usize::try_from(selection)
            .ok()
            .and_then(|index| self.choices.get(index))
    }
}
