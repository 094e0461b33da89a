use questionnaire_types::{
    AnswerValue, Answers, DemographicField, DemographicProfile, QuestionCatalog, QuestionId,
};

use crate::{Step, Submission};

/// State for one respondent's walk through a survey.
///
/// The session owns the catalog it walks plus everything collected so far.
/// Every operation is a synchronous, total function over in-memory state: a
/// presentation layer renders [`Self::current_step`] and routes user input
/// back into the mutation methods.
///
/// The walk has three phases: the question steps (`position` in
/// `0..catalog.len()`), the demographics step (`position == catalog.len()`),
/// and the completed state, entered by advancing past the demographics step
/// and left only via [`Self::reset`].
#[derive(Debug, Clone)]
pub struct SurveySession {
    /// The questions this session walks through.
    catalog: QuestionCatalog,

    /// Collected answers, keyed by question id.
    answers: Answers,

    /// Collected respondent profile.
    demographics: DemographicProfile,

    /// Current step index; `catalog.len()` is the demographics step.
    position: usize,

    /// Set once the demographics step has been advanced past.
    completed: bool,
}

impl SurveySession {
    /// Create a fresh session over the given catalog.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            answers: Answers::new(),
            demographics: DemographicProfile::new(),
            position: 0,
            completed: false,
        }
    }

    /// The catalog this session walks.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Current step index, in `0..=catalog.len()`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the demographics step has been advanced past.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// What the presentation layer should render right now.
    pub fn current_step(&self) -> Step<'_> {
        match self.catalog.question_at(self.position) {
            Some(question) => Step::Question(question),
            None => Step::Demographics,
        }
    }

    /// Fraction of the step sequence walked so far, in `(0, 1]`.
    ///
    /// The demographics step counts as one step, so a fresh session over `n`
    /// questions reports `1 / (n + 1)`. Derived on demand, never stored.
    pub fn progress(&self) -> f64 {
        (self.position + 1) as f64 / (self.catalog.len() + 1) as f64
    }

    /// [`Self::progress`] as a whole percentage, rounded to nearest.
    pub fn progress_percent(&self) -> u8 {
        (self.progress() * 100.0).round() as u8
    }

    /// Record the answer for a question, replacing any previous one.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the catalog or the value's shape does not
    /// match the question's kind. Both are contract violations by the
    /// presentation layer, not runtime conditions to recover from.
    pub fn record_answer(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        let id = id.into();
        let value = value.into();
        let Some(question) = self.catalog.find(&id) else {
            panic!("answer recorded for unknown question id: {id}");
        };
        assert!(
            value.matches_kind(question.kind()),
            "answer shape {} does not match question '{id}'",
            value.type_name(),
        );
        self.answers.insert(id, value);
    }

    /// Set one demographic field, replacing any previous value.
    pub fn set_demographic(&mut self, field: DemographicField, value: impl Into<String>) {
        self.demographics.set(field, value);
    }

    /// The recorded answer for a question, or `None` if unanswered.
    ///
    /// Presentation layers render `None` as
    /// [`AnswerValue::unanswered`] for the question's kind.
    pub fn answer_for(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    /// All answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The respondent profile collected so far.
    pub fn demographics(&self) -> &DemographicProfile {
        &self.demographics
    }

    /// Move one step forward.
    ///
    /// On the demographics step this completes the session instead of moving.
    /// Once completed, a no-op.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.position < self.catalog.len() {
            self.position += 1;
        } else {
            self.completed = true;
        }
    }

    /// Move one step back.
    ///
    /// A no-op on the first step and once completed; never clears the
    /// completed flag.
    pub fn retreat(&mut self) {
        if self.completed {
            return;
        }
        self.position = self.position.saturating_sub(1);
    }

    /// Discard everything collected and return to the first step.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.demographics.clear();
        self.position = 0;
        self.completed = false;
    }

    /// Snapshot of the collected data, available once the session completes.
    pub fn submission(&self) -> Option<Submission> {
        self.completed.then(|| Submission {
            answers: self.answers.clone(),
            demographics: self.demographics.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use questionnaire_types::Question;

    use super::*;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::single_choice("format", "Sales", "Which format?", ["Online", "Offline"]),
            Question::multi_choice("missing", "Competitors", "What is missing?", ["Price", "Schedule"]),
            Question::free_text("competitors", "Competitors", "Which clubs do you know?"),
        ])
    }

    #[test]
    fn starts_on_first_question() {
        let session = SurveySession::new(catalog());

        assert_eq!(session.position(), 0);
        assert!(!session.is_completed());
        let step = session.current_step();
        assert_eq!(step.question().map(|q| q.id().as_str()), Some("format"));
    }

    #[test]
    fn advance_walks_questions_then_demographics_then_completes() {
        let mut session = SurveySession::new(catalog());

        session.advance();
        session.advance();
        session.advance();
        assert_eq!(session.position(), 3);
        assert!(session.current_step().is_demographics());
        assert!(!session.is_completed());

        session.advance();
        assert!(session.is_completed());
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn advance_and_retreat_are_noops_once_completed() {
        let mut session = SurveySession::new(catalog());
        for _ in 0..4 {
            session.advance();
        }
        assert!(session.is_completed());

        session.advance();
        session.retreat();
        assert!(session.is_completed());
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn retreat_stops_at_first_question() {
        let mut session = SurveySession::new(catalog());
        session.retreat();
        assert_eq!(session.position(), 0);

        session.advance();
        session.retreat();
        session.retreat();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn position_stays_in_bounds_under_mixed_navigation() {
        let mut session = SurveySession::new(catalog());
        let steps = [1, 1, -1, 1, 1, -1, -1, -1, -1, 1, 1, 1, 1];

        for step in steps {
            if step > 0 {
                session.advance();
            } else {
                session.retreat();
            }
            assert!(session.position() <= session.catalog().len());
        }
    }

    #[test]
    fn record_answer_upserts() {
        let mut session = SurveySession::new(catalog());

        session.record_answer("format", "Online");
        session.record_answer("format", "Offline");

        assert_eq!(session.answers().len(), 1);
        assert_eq!(
            session.answer_for(&"format".into()).and_then(AnswerValue::as_str),
            Some("Offline")
        );
    }

    #[test]
    fn multi_choice_answer_is_replaced_not_merged() {
        let mut session = SurveySession::new(catalog());

        session.record_answer("missing", vec!["Price"]);
        session.record_answer("missing", vec!["Schedule"]);

        let set = session.answers().get_set(&"missing".into()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("Schedule"));
    }

    #[test]
    fn answer_for_unanswered_is_none() {
        let session = SurveySession::new(catalog());
        assert_eq!(session.answer_for(&"format".into()), None);
    }

    #[test]
    fn demographics_last_write_wins() {
        let mut session = SurveySession::new(catalog());

        session.set_demographic(DemographicField::Age, "25-34");
        session.set_demographic(DemographicField::Age, "18-24");

        assert_eq!(session.demographics().get(DemographicField::Age), Some("18-24"));
    }

    #[test]
    fn progress_spans_all_steps() {
        let mut session = SurveySession::new(catalog());

        assert_eq!(session.progress(), 0.25);
        assert_eq!(session.progress_percent(), 25);

        let mut previous = session.progress();
        for _ in 0..3 {
            session.advance();
            assert!(session.progress() >= previous);
            previous = session.progress();
        }
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = SurveySession::new(catalog());
        session.record_answer("format", "Online");
        session.set_demographic(DemographicField::Gender, "male");
        for _ in 0..4 {
            session.advance();
        }
        assert!(session.is_completed());

        session.reset();

        assert_eq!(session.position(), 0);
        assert!(!session.is_completed());
        assert!(session.answers().is_empty());
        assert!(session.demographics().is_empty());
    }

    #[test]
    fn submission_is_available_exactly_on_completion() {
        let mut session = SurveySession::new(catalog());
        session.record_answer("competitors", "Dynamo");
        session.set_demographic(DemographicField::Experience, "amateur");

        for _ in 0..3 {
            session.advance();
            assert!(session.submission().is_none());
        }
        session.advance();

        let submission = session.submission().unwrap();
        assert_eq!(
            submission.answers.get_string(&"competitors".into()).unwrap(),
            "Dynamo"
        );
        assert_eq!(
            submission.demographics.get(DemographicField::Experience),
            Some("amateur")
        );
    }

    #[test]
    fn empty_catalog_goes_straight_to_demographics() {
        let mut session = SurveySession::new(QuestionCatalog::empty());

        assert!(session.current_step().is_demographics());
        assert_eq!(session.progress(), 1.0);

        session.advance();
        assert!(session.is_completed());
        assert_eq!(session.position(), 0);
    }

    #[test]
    #[should_panic(expected = "unknown question id")]
    fn unknown_question_id_panics() {
        let mut session = SurveySession::new(catalog());
        session.record_answer("bogus", "value");
    }

    #[test]
    #[should_panic(expected = "does not match question")]
    fn mismatched_answer_shape_panics() {
        let mut session = SurveySession::new(catalog());
        session.record_answer("missing", "not a set");
    }
}
