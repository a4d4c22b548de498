use asl_core::catalog;
use dioxus::prelude::*;

use super::QuizLesson;

#[component]
pub fn QuizChart() -> Element {
    let lessons = catalog::quiz_chart();
    rsx! {
        section { id: "QuizChart", class: "quiz-chart",
            h3 { class: "quiz-chart__title", "Asl Chart" }
            div { class: "quiz-chart__lessons",
                for lesson in lessons {
                    QuizLesson { key: "{lesson.slug}", lesson }
                }
            }
        }
    }
}
