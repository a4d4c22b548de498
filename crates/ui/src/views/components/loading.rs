use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", role: "status",
            span { class: "loading__spinner" }
            span { "Loading..." }
        }
    }
}
