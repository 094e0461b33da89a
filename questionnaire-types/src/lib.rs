//! Core types for the questionnaire crate.
//!
//! This crate provides the presentation-agnostic building blocks for survey
//! sessions:
//! - `QuestionCatalog` - the ordered question list a session walks through
//! - `Question` and `QuestionKind` - individual questions and their types
//! - `Answers` and `AnswerValue` - collected data, keyed by question id
//! - `DemographicField` and `DemographicProfile` - the respondent profile
//!   collected on the trailing demographics step

mod question_id;
pub use question_id::QuestionId;

mod question;
pub use question::{ChoiceQuestion, Question, QuestionKind, TextQuestion};

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod demographics;
pub use demographics::{DemographicField, DemographicProfile};

mod catalog;
pub use catalog::QuestionCatalog;
