//! Scripted end-to-end run of the volleyball club survey.
//!
//! Run with: `cargo run -p club-survey --example club_walkthrough`

use anyhow::{Context, Result};
use club_survey::{DEMOGRAPHICS_TITLE, TITLE, catalog, demographic_label};
use questionnaire::{AnswerValue, DemographicField, ScriptedRespondent, SurveySession};

fn main() -> Result<()> {
    let mut session = SurveySession::new(catalog());

    println!("{TITLE}");
    if let Some(prelude) = &session.catalog().prelude {
        println!("{prelude}");
    }
    println!();

    let respondent = ScriptedRespondent::new()
        .with_string("format", "Онлайн")
        .with_string("delivery", "Оба варианта")
        .with_string("competitors", "Динамо, местный фитнес-центр")
        .with_string("market_share", "26-50%")
        .with_selection("missing", ["Цены", "Расписание"])
        .with_selection("priorities", ["Уровень тренера", "Атмосфера"])
        .with_selection("advantages", ["Регулярные турниры"])
        .with_demographic(DemographicField::Gender, "male")
        .with_demographic(DemographicField::Age, "25-34")
        .with_demographic(DemographicField::Experience, "amateur");
    respondent.run(&mut session);

    let submission = session
        .submission()
        .context("scripted run did not complete the session")?;

    for question in session.catalog().questions() {
        let answer = session
            .answer_for(question.id())
            .cloned()
            .unwrap_or_else(|| AnswerValue::unanswered(question.kind()));
        match answer {
            AnswerValue::String(text) => println!("{}\n  {text}", question.prompt()),
            AnswerValue::StringSet(options) => {
                let joined = options.into_iter().collect::<Vec<_>>().join(", ");
                println!("{}\n  {joined}", question.prompt());
            }
        }
    }

    println!("\n{DEMOGRAPHICS_TITLE}");
    for (field, value) in submission.demographics.answered() {
        println!("  {}: {value}", demographic_label(field));
    }

    if let Some(epilogue) = &session.catalog().epilogue {
        println!("\n{epilogue}");
    }

    Ok(())
}
