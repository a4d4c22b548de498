use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

/// Replaces the current history entry with `to` once mounted. Renders nothing.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        let _ = navigator.replace(to.clone());
    });
    rsx! {}
}
