use asl_core::quiz::QuizScore;
use dioxus::prelude::*;

#[component]
pub fn CompleteScreen(summary: QuizScore) -> Element {
    rsx! {
        div { class: "quiz-complete",
            h1 { class: "quiz-complete__title", "Lesson complete!" }
            div { class: "quiz-complete__stats",
                div { class: "quiz-complete__stat quiz-complete__stat--xp",
                    span { class: "quiz-complete__label", "Total XP" }
                    span { class: "quiz-complete__value", "{summary.xp}" }
                }
                div { class: "quiz-complete__stat quiz-complete__stat--score",
                    span { class: "quiz-complete__label", "Score" }
                    span { class: "quiz-complete__value", "{summary.score}%" }
                }
            }
            p { class: "quiz-complete__detail",
                "{summary.num_correct} correct, {summary.num_incorrect} incorrect"
            }
        }
    }
}
