use std::collections::BTreeSet;

use crate::{AnswerValue, QuestionId};

/// Error type for typed answer access.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("no answer recorded for question: {0}")]
    Unanswered(QuestionId),

    #[error("wrong answer shape for question '{id}': expected {expected}, got {actual}")]
    WrongShape {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Recorded answers, keyed by question id.
///
/// Holds at most one answer per id: inserting for an id that already has an
/// answer replaces the stored value (upsert), keeping its original position.
/// Iteration yields answers in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    entries: Vec<(QuestionId, AnswerValue)>,
}

impl Answers {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the answer for a question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        let id = id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((id, value)),
        }
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value)
    }

    /// Check if a question has a recorded answer.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.entries.iter().any(|(key, _)| key == id)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        let index = self.entries.iter().position(|(key, _)| key == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over all id-value pairs, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.entries.iter().map(|(id, value)| (id, value))
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no recorded answers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all recorded answers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // === Typed accessors ===

    /// Get a string answer (single-choice or free text).
    pub fn get_string(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::String(s)) => Ok(s),
            Some(other) => Err(AnswerError::WrongShape {
                id: id.clone(),
                expected: "String",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Unanswered(id.clone())),
        }
    }

    /// Get a multi-choice selection.
    pub fn get_set(&self, id: &QuestionId) -> Result<&BTreeSet<String>, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::StringSet(set)) => Ok(set),
            Some(other) => Err(AnswerError::WrongShape {
                id: id.clone(),
                expected: "StringSet",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Unanswered(id.clone())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::vec::IntoIter<(QuestionId, AnswerValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
