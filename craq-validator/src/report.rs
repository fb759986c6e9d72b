use std::collections::HashMap;

use craq_types::{AnswerError, QuestionKey};

/// The outcome of validating one answer set against a questionnaire.
///
/// Holds at most one finding per question: the validator visits each
/// question exactly once. Validity is derived from the finding map at call
/// time, never cached, so it is always consistent with the map's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: HashMap<QuestionKey, AnswerError>,
}

impl ValidationReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: QuestionKey, error: AnswerError) {
        self.errors.insert(key, error);
    }

    /// Whether the answer set passed validation.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the finding for a question, if it failed.
    pub fn error_for(&self, key: QuestionKey) -> Option<AnswerError> {
        self.errors.get(&key).copied()
    }

    /// All findings, keyed by question.
    pub fn errors(&self) -> &HashMap<QuestionKey, AnswerError> {
        &self.errors
    }

    /// Get an iterator over all findings.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, AnswerError)> + '_ {
        self.errors.iter().map(|(key, error)| (*key, *error))
    }

    /// Get the findings in question order, for deterministic display.
    pub fn sorted(&self) -> Vec<(QuestionKey, AnswerError)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(key, _)| *key);
        entries
    }

    /// Get the number of questions that failed.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no findings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoIterator for ValidationReport {
    type Item = (QuestionKey, AnswerError);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionKey, AnswerError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_follows_findings() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());

        report.insert(QuestionKey::new(1), AnswerError::NotAnswered);
        assert!(!report.is_valid());
        assert_eq!(
            report.error_for(QuestionKey::new(1)),
            Some(AnswerError::NotAnswered)
        );
        assert_eq!(report.error_for(QuestionKey::new(0)), None);
    }

    #[test]
    fn sorted_orders_by_position() {
        let mut report = ValidationReport::new();
        report.insert(QuestionKey::new(2), AnswerError::NotAnswered);
        report.insert(QuestionKey::new(0), AnswerError::InvalidAnswer);
        report.insert(QuestionKey::new(1), AnswerError::NotAnswered);

        let keys: Vec<_> = report.sorted().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![QuestionKey::new(0), QuestionKey::new(1), QuestionKey::new(2)]
        );
    }
}
