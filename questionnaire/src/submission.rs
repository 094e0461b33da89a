use questionnaire_types::{Answers, DemographicProfile};

/// Everything a completed session collected, handed over verbatim.
///
/// External consumers (a results renderer, a submission endpoint) take this
/// snapshot at the moment the session completes. The session keeps its own
/// copy, so it can still be inspected or `reset()` afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    /// Recorded answers, in first-insertion order.
    pub answers: Answers,

    /// The respondent profile; unset fields stay unset.
    pub demographics: DemographicProfile,
}
