use std::collections::BTreeSet;

use crate::QuestionKind;

/// A single recorded answer value.
///
/// The shape must match the answered question's kind: single-choice and
/// free-text questions record a `String`, multi-choice questions record a
/// `StringSet`.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// A single string (from single-choice or free-text questions).
    String(String),

    /// The set of selected options (from multi-choice questions).
    StringSet(BTreeSet<String>),
}

impl AnswerValue {
    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a set of strings.
    pub fn as_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::StringSet(set) => Some(set),
            _ => None,
        }
    }

    /// Get the shape name of this value for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::StringSet(_) => "StringSet",
        }
    }

    /// Check whether this value has the shape `kind` records.
    pub fn matches_kind(&self, kind: &QuestionKind) -> bool {
        match self {
            Self::String(_) => !kind.is_multi(),
            Self::StringSet(_) => kind.is_multi(),
        }
    }

    /// The empty value of the shape `kind` records.
    ///
    /// Presentation layers render this for questions that have no recorded
    /// answer yet.
    pub fn unanswered(kind: &QuestionKind) -> Self {
        if kind.is_multi() {
            Self::StringSet(BTreeSet::new())
        } else {
            Self::String(String::new())
        }
    }

    /// Check if this value is empty (empty string or empty set).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::StringSet(set) => set.is_empty(),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<BTreeSet<String>> for AnswerValue {
    fn from(set: BTreeSet<String>) -> Self {
        Self::StringSet(set)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(options: Vec<String>) -> Self {
        Self::StringSet(options.into_iter().collect())
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(options: Vec<&str>) -> Self {
        Self::StringSet(options.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChoiceQuestion, TextQuestion};

    #[test]
    fn matches_kind() {
        let single = QuestionKind::SingleChoice(ChoiceQuestion::new(["a", "b"]));
        let multi = QuestionKind::MultiChoice(ChoiceQuestion::new(["a", "b"]));
        let text = QuestionKind::FreeText(TextQuestion::new());

        let scalar = AnswerValue::from("a");
        let set = AnswerValue::from(vec!["a", "b"]);

        assert!(scalar.matches_kind(&single));
        assert!(scalar.matches_kind(&text));
        assert!(!scalar.matches_kind(&multi));

        assert!(set.matches_kind(&multi));
        assert!(!set.matches_kind(&single));
        assert!(!set.matches_kind(&text));
    }

    #[test]
    fn unanswered_has_matching_empty_shape() {
        let multi = QuestionKind::MultiChoice(ChoiceQuestion::new(["a"]));
        let text = QuestionKind::FreeText(TextQuestion::new());

        let empty_set = AnswerValue::unanswered(&multi);
        assert!(empty_set.is_empty());
        assert!(empty_set.matches_kind(&multi));

        let empty_text = AnswerValue::unanswered(&text);
        assert!(empty_text.is_empty());
        assert_eq!(empty_text.as_str(), Some(""));
    }

    #[test]
    fn from_vec_deduplicates() {
        let value = AnswerValue::from(vec!["Цены", "Цены", "Расписание"]);
        assert_eq!(value.as_set().unwrap().len(), 2);
    }
}
