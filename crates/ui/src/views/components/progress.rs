use dioxus::prelude::*;

#[component]
pub fn ProgressBar(progress: u8) -> Element {
    let fill_class = if progress == 0 {
        "progress__fill progress__fill--empty"
    } else {
        "progress__fill"
    };
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{progress}",
            div { class: "{fill_class}", style: "width: {progress}%;",
                div { class: "progress__shine" }
            }
        }
    }
}
