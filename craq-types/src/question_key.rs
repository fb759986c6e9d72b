use std::fmt;
use std::str::FromStr;

/// The stable identifier joining a question's position to its entry in an
/// answer set and in a validation report.
///
/// Keys are derived from the question's zero-based position and render as
/// `q0`, `q1`, … Construction from a position is total and injective: every
/// position maps to exactly one key and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionKey(usize);

impl QuestionKey {
    /// Create the key for a zero-based question position.
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the zero-based question position.
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QuestionKey {
    fn from(position: usize) -> Self {
        Self(position)
    }
}

/// Error returned when parsing a [`QuestionKey`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid question key '{0}', expected 'q' followed by a position")]
pub struct ParseKeyError(String);

impl FromStr for QuestionKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('q')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}
