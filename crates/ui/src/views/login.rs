use dioxus::prelude::*;
use dioxus_router::use_navigator;

use asl_core::model::AuthToken;
use services::QueryKey;
use tracing::info;

use crate::context::{AppContext, use_auth};
use crate::routes::Route;
use crate::views::components::Button;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_auth();
    let navigator = use_navigator();
    let mut token_input = use_signal(String::new);
    let mut error = use_signal(|| None::<&'static str>);

    let submit = use_callback(move |()| {
        let raw = token_input.read().clone();
        match AuthToken::new(raw) {
            Ok(token) => {
                ctx.query_cache().invalidate(&QueryKey::ME);
                auth.login(token);
                info!("signed in");
                error.set(None);
                token_input.set(String::new());
                let _ = navigator.push(Route::Lessons {});
            }
            Err(_) => error.set(Some("Enter an access token to continue.")),
        }
    });

    rsx! {
        div { class: "page login-page",
            h1 { class: "page__title", "Log in" }
            p { class: "page__intro", "Paste the access token issued by the ASL API." }
            form {
                class: "login-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    submit.call(());
                },
                label { r#for: "token", "Access token" }
                input {
                    id: "token",
                    r#type: "password",
                    value: "{token_input}",
                    oninput: move |evt| token_input.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "login-form__error", "{message}" }
                }
                Button { title: "Log in", class: "btn-primary", onclick: move |_| submit.call(()) }
            }
        }
    }
}
