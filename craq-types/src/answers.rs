use std::collections::HashMap;

use crate::QuestionKey;

/// A respondent's submitted answers.
///
/// Uses [`QuestionKey`] as keys; absence of a key means the question was not
/// answered. The stored value is the zero-based index of the selected option,
/// kept as `i64` so that out-of-range submissions (including negative ones)
/// survive intact for the validator to report. The container itself never
/// rejects a selection value.
///
/// Whether an answer set was submitted at all is expressed separately, as
/// `Option<&Answers>` at the validation boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    values: HashMap<QuestionKey, i64>,
}

impl Answers {
    /// Create a new empty answer set.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert the selected option index for a question.
    pub fn insert(&mut self, key: impl Into<QuestionKey>, selection: i64) {
        self.values.insert(key.into(), selection);
    }

    /// Get the selected option index for a question.
    pub fn get(&self, key: QuestionKey) -> Option<i64> {
        self.values.get(&key).copied()
    }

    /// Check if a question has an answer.
    pub fn contains(&self, key: QuestionKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, key: QuestionKey) -> Option<i64> {
        self.values.remove(&key)
    }

    /// Get an iterator over all key-selection pairs.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, i64)> + '_ {
        self.values.iter().map(|(key, selection)| (*key, *selection))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another answer set into this one.
    pub fn extend(&mut self, other: Answers) {
        self.values.extend(other.values);
    }
}

impl<K: Into<QuestionKey>> FromIterator<(K, i64)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, selection)| (key.into(), selection))
                .collect(),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionKey, i64);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionKey, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionKey, &'a i64);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionKey, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
