use dioxus::prelude::*;

use crate::context::use_auth;
use crate::hooks::{use_lessons, use_me};
use crate::routes::Route;
use crate::views::components::{Button, LessonContainer, Loading, Redirect};

#[component]
pub fn LessonsView() -> Element {
    let auth = use_auth();
    if !auth.logged_in() {
        return rsx! { Redirect { to: Route::Login {} } };
    }
    rsx! { LessonsPage {} }
}

#[component]
fn LessonsPage() -> Element {
    let auth = use_auth();
    let me = use_me(auth.token());
    let lessons = use_lessons(auth.token());

    let username = me.data.as_ref().map(|user| user.username.clone());
    let retry = lessons.clone();
    let show_error = lessons.error.filter(|_| lessons.data.is_empty());
    let loading = lessons.is_fetching && lessons.data.is_empty();

    rsx! {
        div { class: "page lessons-page",
            h1 { class: "page__title", "Lessons" }
            if let Some(username) = username {
                div { class: "lessons-page__welcome",
                    h2 { "Welcome {username}!" }
                }
            }
            p { class: "page__intro",
                "American Sign Language is a complete visual language. Work through the lessons in order and take each quiz when you feel ready."
            }
            if loading {
                Loading {}
            } else if let Some(error) = show_error {
                div { class: "error-banner",
                    p { "{error.message()}" }
                    Button { title: "Retry", class: "btn-outline", onclick: move |_| retry.refetch() }
                }
            } else {
                div { class: "lessons-page__list",
                    for lesson in lessons.data.clone() {
                        LessonContainer { key: "{lesson.slug}", lesson }
                    }
                }
            }
        }
    }
}
