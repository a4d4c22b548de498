use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use tracing::info;

use crate::context::{AppContext, use_auth};
use crate::views::{HomeView, LessonsView, LoginView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/quiz/:slug", QuizView)] Quiz { slug: String },
        #[route("/login", LoginView)] Login {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = use_auth();
    let navigator = use_navigator();

    let logout = move |_| {
        auth.logout();
        ctx.query_cache().clear();
        info!("signed out");
        let _ = navigator.push(Route::Login {});
    };

    rsx! {
        nav { class: "sidebar",
            h1 { "ASL" }
            ul {
                li { Link { to: Route::Home {}, "Chart" } }
                li { Link { to: Route::Lessons {}, "Lessons" } }
                if auth.logged_in() {
                    li {
                        button { class: "sidebar__logout", r#type: "button", onclick: logout, "Log out" }
                    }
                } else {
                    li { Link { to: Route::Login {}, "Log in" } }
                }
            }
        }
    }
}
