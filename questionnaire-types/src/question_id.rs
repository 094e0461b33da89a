use std::fmt;

/// Identifies a question within a catalog, e.g. `"format"`.
///
/// Used as the key under which answers are recorded. Ids are opaque to the
/// core: the catalog author picks them and the presentation layer echoes them
/// back when recording input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}
