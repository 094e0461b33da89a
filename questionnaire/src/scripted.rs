//! Scripted respondent for driving sessions without user interaction.
//!
//! `ScriptedRespondent` walks a session to completion with pre-defined
//! answers, which is useful for exercising survey content in tests and
//! examples.
//!
//! # Example
//!
//! ```
//! use questionnaire::{Question, QuestionCatalog, ScriptedRespondent, SurveySession};
//!
//! let catalog = QuestionCatalog::new(vec![Question::free_text(
//!     "competitors",
//!     "Competitors",
//!     "Which clubs do you know?",
//! )]);
//! let mut session = SurveySession::new(catalog);
//!
//! ScriptedRespondent::new()
//!     .with_string("competitors", "Dynamo")
//!     .run(&mut session);
//!
//! assert!(session.is_completed());
//! ```

use std::collections::HashMap;

use questionnaire_types::{AnswerValue, DemographicField, QuestionId};

use crate::{Step, SurveySession};

/// Drives a session to completion with pre-defined input.
///
/// Questions without a scripted answer are skipped: the wizard never requires
/// an answer to advance, so a partial script is a valid respondent, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRespondent {
    answers: HashMap<QuestionId, AnswerValue>,
    demographics: Vec<(DemographicField, String)>,
}

impl ScriptedRespondent {
    /// Create a respondent with no scripted input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an answer for a question.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        self.answers.insert(id.into(), value.into());
        self
    }

    /// Script a string answer (single-choice or free text).
    pub fn with_string(self, id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        self.with_answer(id, AnswerValue::String(value.into()))
    }

    /// Script a multi-choice selection.
    pub fn with_selection(
        self,
        id: impl Into<QuestionId>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.with_answer(
            id,
            AnswerValue::StringSet(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Script one demographic field.
    pub fn with_demographic(mut self, field: DemographicField, value: impl Into<String>) -> Self {
        self.demographics.push((field, value.into()));
        self
    }

    /// Walk `session` from its current state to completion.
    pub fn run(&self, session: &mut SurveySession) {
        while !session.is_completed() {
            let question_id = match session.current_step() {
                Step::Question(question) => Some(question.id().clone()),
                Step::Demographics => None,
            };
            match question_id {
                Some(id) => {
                    if let Some(value) = self.answers.get(&id) {
                        session.record_answer(id, value.clone());
                    }
                }
                None => {
                    for (field, value) in &self.demographics {
                        session.set_demographic(*field, value.clone());
                    }
                }
            }
            session.advance();
        }
    }
}
