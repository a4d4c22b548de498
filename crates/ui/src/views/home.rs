use dioxus::prelude::*;

use crate::views::components::QuizChart;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            h1 { class: "page__title", "Learn American Sign Language" }
            p { class: "page__intro",
                "Pick a lesson from the chart, study its signs, then test yourself with a quick quiz."
            }
            QuizChart {}
        }
    }
}
