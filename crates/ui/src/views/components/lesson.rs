use asl_core::model::Lesson;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::{LessonCardVm, map_lesson_card};

/// Chart entry: lesson heading, its exercise and the signs it teaches.
#[component]
pub fn QuizLesson(lesson: Lesson) -> Element {
    let card = map_lesson_card(&lesson);
    let questions = lesson.questions.clone();
    let signs = card.signs.clone();

    rsx! {
        article { class: "quiz-lesson",
            LessonBanner { card }
            if !questions.is_empty() {
                div { class: "quiz-lesson__questions",
                    for question in questions {
                        figure { key: "{question.id}", class: "quiz-lesson__question",
                            img { src: "{question.image_url}", alt: "{question.description}" }
                            figcaption { "{question.description}" }
                        }
                    }
                }
            }
            ul { class: "quiz-lesson__signs",
                for sign in signs {
                    li { key: "{sign.word}", class: "sign-row",
                        img { class: "sign-row__image", src: "{sign.image}", alt: "{sign.word}" }
                        span { class: "sign-row__word", "{sign.word}" }
                        span { class: "sign-row__meaning", "{sign.meaning}" }
                    }
                }
            }
        }
    }
}

/// Lesson listing entry linking to its quiz.
#[component]
pub fn LessonContainer(lesson: Lesson) -> Element {
    let card = map_lesson_card(&lesson);
    rsx! {
        article { class: "lesson-container",
            LessonBanner { card }
        }
    }
}

#[component]
fn LessonBanner(card: LessonCardVm) -> Element {
    rsx! {
        header { class: "{card.banner_class}",
            div { class: "lesson-banner__heading",
                span { class: "lesson-banner__number", "{card.number_label}" }
                h4 { class: "lesson-banner__title", "{card.title}" }
            }
            if let Some(exercise) = card.exercise_title.as_ref() {
                p { class: "lesson-banner__exercise", "{exercise}" }
            }
            span { class: "lesson-banner__count", "{card.signs_label}" }
            Link { class: "btn lesson-banner__start", to: Route::Quiz { slug: card.quiz_slug.clone() },
                "Start quiz"
            }
        }
    }
}
