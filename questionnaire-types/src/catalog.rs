use crate::{Question, QuestionId};

/// The ordered questions making up a survey, plus optional framing text.
///
/// A catalog is presentation-agnostic and read-only during a session: the
/// session indexes into it to know what each step asks and how many steps
/// there are.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    /// Optional message shown before the first question.
    pub prelude: Option<String>,

    /// All questions, in presentation order.
    pub questions: Vec<Question>,

    /// Optional message shown once the survey completes.
    pub epilogue: Option<String>,
}

impl QuestionCatalog {
    /// Create a new catalog with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            prelude: None,
            questions: Vec::new(),
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the question at a step index.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by id.
    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the catalog has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::empty()
    }
}
