use asl_core::model::Lesson;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignRowVm {
    pub word: String,
    pub meaning: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub number_label: String,
    pub title: String,
    pub exercise_title: Option<String>,
    pub banner_class: String,
    pub quiz_slug: String,
    pub signs_label: String,
    pub signs: Vec<SignRowVm>,
}

#[must_use]
pub fn map_lesson_card(lesson: &Lesson) -> LessonCardVm {
    let banner_class = [
        "lesson-banner",
        lesson.background_color.as_str(),
        lesson.background_image.as_str(),
    ]
    .iter()
    .filter(|class| !class.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ");

    let signs_label = match lesson.signs.len() {
        1 => "1 sign".to_string(),
        count => format!("{count} signs"),
    };

    LessonCardVm {
        number_label: format!("Lesson {}", lesson.number),
        title: lesson.title.clone(),
        exercise_title: lesson.exercise.as_ref().map(|exercise| exercise.title.clone()),
        banner_class,
        quiz_slug: lesson.quiz_slug().to_string(),
        signs_label,
        signs: lesson
            .signs
            .iter()
            .map(|sign| SignRowVm {
                word: sign.word.clone(),
                meaning: sign.meaning.clone(),
                image: sign.image.clone(),
            })
            .collect(),
    }
}
