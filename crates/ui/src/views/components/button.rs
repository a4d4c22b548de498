use dioxus::prelude::*;

#[component]
pub fn Button(
    title: &'static str,
    #[props(default, into)] class: String,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "btn {class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            "{title}"
        }
    }
}
