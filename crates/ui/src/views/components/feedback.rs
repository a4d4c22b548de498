use dioxus::prelude::*;

use crate::vm::QuestionState;

#[component]
pub fn FeedbackMessage(question_state: QuestionState, answer: String) -> Element {
    match question_state {
        QuestionState::Correct => rsx! {
            div { class: "feedback feedback--correct",
                h2 { class: "feedback__title", "Nice job!" }
            }
        },
        QuestionState::Incorrect => rsx! {
            div { class: "feedback feedback--incorrect",
                h2 { class: "feedback__title", "Correct solution:" }
                p { class: "feedback__answer", "{answer}" }
            }
        },
    }
}
