use questionnaire_types::Question;

/// What the presentation layer should render at the session's current
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'a> {
    /// One of the catalog's questions.
    Question(&'a Question),

    /// The trailing respondent-profile form.
    Demographics,
}

impl<'a> Step<'a> {
    /// The question at this step, `None` on the demographics step.
    pub fn question(&self) -> Option<&'a Question> {
        match *self {
            Self::Question(question) => Some(question),
            Self::Demographics => None,
        }
    }

    /// Check if this is the demographics step.
    pub fn is_demographics(&self) -> bool {
        matches!(self, Self::Demographics)
    }
}
