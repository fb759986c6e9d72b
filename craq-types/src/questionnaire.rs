use crate::{Question, QuestionKey};

/// The top-level structure containing all questions of a questionnaire.
///
/// A questionnaire is an ordered collection of questions. Positions are
/// stable: a question's [`QuestionKey`] is its index in this sequence, and
/// the key joins the question to its entry in an answer set and in a
/// validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    /// All questions, in presentation order.
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Create a new questionnaire with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Create an empty questionnaire.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question a key identifies, if the key is in range.
    pub fn question(&self, key: QuestionKey) -> Option<&Question> {
        self.questions.get(key.position())
    }

    /// Iterate over the keys of all questions, in position order.
    pub fn keys(&self) -> impl Iterator<Item = QuestionKey> + '_ {
        (0..self.questions.len()).map(QuestionKey::new)
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::empty()
    }
}
