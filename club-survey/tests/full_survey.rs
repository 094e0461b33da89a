//! End-to-end runs of the real volleyball club survey.

use club_survey::catalog;
use questionnaire::{DemographicField, ScriptedRespondent, SurveySession};

#[test]
fn seven_questions_then_demographics_then_done() {
    let mut session = SurveySession::new(catalog());

    session.record_answer("format", "Онлайн");
    for _ in 0..7 {
        session.advance();
    }

    assert_eq!(session.position(), 7);
    assert!(session.current_step().is_demographics());
    assert!(!session.is_completed());

    session.advance();

    assert!(session.is_completed());
    assert_eq!(session.position(), 7);
    assert_eq!(session.answers().len(), 1);
    assert_eq!(session.answers().get_string(&"format".into()).unwrap(), "Онлайн");
}

#[test]
fn revised_multi_choice_selection_replaces_the_previous_one() {
    let mut session = SurveySession::new(catalog());

    session.record_answer("missing", vec!["Цены"]);
    session.record_answer("missing", vec!["Цены", "Расписание"]);

    let selection = session.answers().get_set(&"missing".into()).unwrap();
    assert_eq!(selection.len(), 2);
    assert!(selection.contains("Цены"));
    assert!(selection.contains("Расписание"));
}

#[test]
fn demographic_field_keeps_only_the_latest_value() {
    let mut session = SurveySession::new(catalog());

    session.set_demographic(DemographicField::Age, "25-34");
    session.set_demographic(DemographicField::Age, "18-24");

    assert_eq!(session.demographics().get(DemographicField::Age), Some("18-24"));
}

#[test]
fn back_from_demographics_returns_to_the_last_question() {
    let mut session = SurveySession::new(catalog());
    for _ in 0..7 {
        session.advance();
    }
    assert!(session.current_step().is_demographics());

    session.retreat();

    let question = session.current_step().question().unwrap();
    assert_eq!(question.id().as_str(), "advantages");
}

#[test]
fn scripted_respondent_completes_the_real_survey() {
    let mut session = SurveySession::new(catalog());

    ScriptedRespondent::new()
        .with_string("format", "Оба варианта")
        .with_string("delivery", "Не нужно")
        .with_string("competitors", "Динамо")
        .with_string("market_share", "Не знаю")
        .with_selection("missing", ["Качество тренеров"])
        .with_selection("priorities", ["Цена", "Локация"])
        .with_selection("advantages", ["Членство в клубе"])
        .with_demographic(DemographicField::Gender, "female")
        .with_demographic(DemographicField::Income, "average")
        .run(&mut session);

    assert!(session.is_completed());
    assert_eq!(session.progress(), 1.0);

    let submission = session.submission().unwrap();
    assert_eq!(submission.answers.len(), 7);
    assert_eq!(submission.demographics.len(), 2);
    assert_eq!(submission.demographics.get(DemographicField::Income), Some("average"));
}
