//! # questionnaire
//!
//! Wizard-style survey sessions over a fixed question catalog.
//! Presentation-agnostic.
//!
//! A [`SurveySession`] walks an ordered list of questions followed by a single
//! demographics step. A presentation layer renders [`SurveySession::current_step`]
//! and routes user input into the mutation operations; once the session
//! completes, the collected data is handed over as a [`Submission`].
//!
//! ```
//! use questionnaire::{Question, QuestionCatalog, SurveySession};
//!
//! let catalog = QuestionCatalog::new(vec![Question::single_choice(
//!     "format",
//!     "Sales",
//!     "Which format suits you?",
//!     ["Online", "In club"],
//! )]);
//! let mut session = SurveySession::new(catalog);
//!
//! session.record_answer("format", "Online");
//! session.advance(); // to the demographics step
//! session.advance(); // past it - completes the session
//!
//! assert!(session.is_completed());
//! let submission = session.submission().unwrap();
//! assert_eq!(submission.answers.get_string(&"format".into()).unwrap(), "Online");
//! ```

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod session;
pub use session::SurveySession;

mod step;
pub use step::Step;

mod submission;
pub use submission::Submission;

// Scripted respondent for driving sessions without user interaction
mod scripted;
pub use scripted::ScriptedRespondent;
