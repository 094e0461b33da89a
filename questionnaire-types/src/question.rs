use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key under which this question's answer is recorded.
    id: QuestionId,

    /// The thematic section this question belongs to.
    category: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of question (determines the expected answer shape).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            prompt: prompt.into(),
            kind,
        }
    }

    /// Create a single-choice question over the given options.
    pub fn single_choice(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            id,
            category,
            prompt,
            QuestionKind::SingleChoice(ChoiceQuestion::new(options)),
        )
    }

    /// Create a multi-choice question over the given options.
    pub fn multi_choice(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            id,
            category,
            prompt,
            QuestionKind::MultiChoice(ChoiceQuestion::new(options)),
        )
    }

    /// Create a free-text question.
    pub fn free_text(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::new(id, category, prompt, QuestionKind::FreeText(TextQuestion::new()))
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the thematic section.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Options offered by a choice question, `None` for free text.
    pub fn options(&self) -> Option<&[String]> {
        self.kind.options()
    }
}

/// The kind of question, determining the expected answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Pick exactly one of the offered options.
    SingleChoice(ChoiceQuestion),

    /// Pick any number of the offered options.
    MultiChoice(ChoiceQuestion),

    /// Unconstrained text input.
    FreeText(TextQuestion),
}

impl QuestionKind {
    /// Check if this kind offers a fixed option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice(_) | Self::MultiChoice(_))
    }

    /// Check if this kind collects a set of values rather than a single string.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::MultiChoice(_))
    }

    /// Options offered by this kind, `None` for free text.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::SingleChoice(choice) | Self::MultiChoice(choice) => Some(choice.options()),
            Self::FreeText(_) => None,
        }
    }
}

/// Configuration for a choice question (single- or multi-select).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// The options offered, in display order.
    pub options: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a new choice configuration with the given options.
    pub fn new(options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the options.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuestion {
    /// Optional placeholder shown while the input is empty.
    pub placeholder: Option<String>,
}

impl TextQuestion {
    /// Create a new free-text configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
        }
    }
}
