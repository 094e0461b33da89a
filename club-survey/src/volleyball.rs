//! The volleyball club market survey.
//!
//! Seven questions across three categories (sales format, competitors,
//! preferences), followed by the standard demographics step.

use questionnaire::{DemographicField, Question, QuestionCatalog, QuestionKind, TextQuestion};

/// Title shown above the wizard.
pub const TITLE: &str = "Опрос для волейбольного клуба";

/// Heading of the trailing demographics form.
pub const DEMOGRAPHICS_TITLE: &str = "Демографические данные";

/// The full survey catalog.
pub fn catalog() -> QuestionCatalog {
    QuestionCatalog::new(vec![
        Question::single_choice(
            "format",
            "Формат продаж",
            "Какой формат покупки услуг вам удобнее?",
            ["Онлайн", "Офлайн в клубе", "Оба варианта"],
        ),
        Question::single_choice(
            "delivery",
            "Формат продаж",
            "Нужна ли услуга доставки спортивных товаров или возможность самовывоза?",
            ["Да, доставка", "Да, самовывоз", "Оба варианта", "Не нужно"],
        ),
        Question::new(
            "competitors",
            "Конкуренты",
            "Какие волейбольные клубы или спортивные центры вы знаете в вашем регионе?",
            QuestionKind::FreeText(TextQuestion::with_placeholder("Введите ваш ответ...")),
        ),
        Question::single_choice(
            "market_share",
            "Конкуренты",
            "Какую часть рынка занимают известные конкуренты в вашем регионе?",
            ["0-25%", "26-50%", "51-75%", "76-100%", "Не знаю"],
        ),
        Question::multi_choice(
            "missing",
            "Конкуренты",
            "Чего вам не хватает в текущих клубах?",
            ["Цены", "Расписание", "Качество тренеров", "Социальная среда", "Оборудование"],
        ),
        Question::multi_choice(
            "priorities",
            "Предпочтения",
            "Что для вас важнее всего при выборе клуба?",
            ["Цена", "Уровень тренера", "Расписание", "Атмосфера", "Локация"],
        ),
        Question::multi_choice(
            "advantages",
            "Предпочтения",
            "Какие преимущества нового клуба для вас наиболее значимы?",
            ["Доступ к онлайн-контенту", "Регулярные турниры", "Членство в клубе", "Персональные планы"],
        ),
    ])
    .with_prelude("Помогите нам стать лучше")
    .with_epilogue("Спасибо за участие в опросе!")
}

/// Field label shown on the demographics form.
pub fn demographic_label(field: DemographicField) -> &'static str {
    match field {
        DemographicField::Gender => "Пол",
        DemographicField::Age => "Возраст",
        DemographicField::Income => "Уровень дохода",
        DemographicField::Activity => "Основная деятельность",
        DemographicField::Marital => "Семейное положение",
        DemographicField::Education => "Образование",
        DemographicField::Region => "Регион",
        DemographicField::Experience => "Спортивный опыт",
    }
}

/// Choice values offered for a demographic field.
///
/// Marital status, education and region take free-form input and offer no
/// fixed list.
pub fn demographic_options(field: DemographicField) -> &'static [&'static str] {
    match field {
        DemographicField::Gender => &["male", "female"],
        DemographicField::Age => &["14-17", "18-24", "25-34", "35-45", "45+"],
        DemographicField::Income => &["below", "average", "above", "business"],
        DemographicField::Activity => &["student", "working", "freelancer", "retired"],
        DemographicField::Experience => &["beginner", "amateur", "semi-pro"],
        DemographicField::Marital | DemographicField::Education | DemographicField::Region => &[],
    }
}
