use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use asl_core::model::{AuthToken, Lesson, LessonId, Sign, User};
use services::{ApiError, AuthApi, LessonApi, QueryCache};

use crate::context::{UiApp, build_app_context, use_auth_provider};
use crate::views::quiz::QuizTestHandles;
use crate::views::{HomeView, LessonsView, LoginView, QuizView};

/// In-memory stand-in for the ASL API.
pub struct FakeApi {
    pub user: User,
    pub lessons: Result<Vec<Lesson>, ()>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            user: User {
                id: "u1".into(),
                username: "sam".into(),
                email: None,
                experience: 0,
            },
            lessons: Ok(vec![colors_lesson()]),
        }
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn me(&self, _token: &AuthToken) -> Result<User, ApiError> {
        Ok(self.user.clone())
    }
}

#[async_trait]
impl LessonApi for FakeApi {
    async fn list_lessons(&self, _token: Option<&AuthToken>) -> Result<Vec<Lesson>, ApiError> {
        self.lessons.clone().map_err(|()| ApiError::Unauthorized)
    }
}

pub fn colors_lesson() -> Lesson {
    Lesson {
        id: LessonId::new(3),
        number: 3,
        title: "Colors".into(),
        slug: "colors".into(),
        background_color: String::new(),
        background_image: String::new(),
        questions: Vec::new(),
        signs: vec![
            Sign::new("/red.jpg", "Red", "The color red."),
            Sign::new("/blue.jpg", "Blue", "The color blue."),
        ],
        exercise: None,
    }
}

struct TestApp {
    api: Arc<FakeApi>,
    queries: QueryCache,
    token: Option<AuthToken>,
}

impl UiApp for TestApp {
    fn auth_api(&self) -> Arc<dyn AuthApi> {
        self.api.clone()
    }

    fn lesson_api(&self) -> Arc<dyn LessonApi> {
        self.api.clone()
    }

    fn query_cache(&self) -> QueryCache {
        self.queries.clone()
    }

    fn initial_token(&self) -> Option<AuthToken> {
        self.token.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lessons,
    Quiz(String),
    Login,
}

/// Lets a test swap the rendered view in place, the way a route change does.
#[derive(Clone, Default)]
pub struct ViewSwitch(Rc<RefCell<Option<Signal<ViewKind>>>>);

impl ViewSwitch {
    fn register(&self, view: Signal<ViewKind>) {
        *self.0.borrow_mut() = Some(view);
    }

    fn set(&self, view: ViewKind) {
        if let Some(mut current) = *self.0.borrow() {
            current.set(view);
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    switch: ViewSwitch,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_auth_provider(ctx.initial_token());
    let view = use_signal(|| props.view.clone());
    use_hook(|| props.switch.register(view));
    use_context_provider(|| view);
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/login")]
    LoginRedirect {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Quiz(slug) => rsx! { QuizView { slug } },
        ViewKind::Login => rsx! { LoginView {} },
    }
}

#[component]
fn LoginRedirect() -> Element {
    rsx! { LoginView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    switch: ViewSwitch,
    pub queries: QueryCache,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn switch_view(&mut self, view: ViewKind) {
        let switch = self.switch.clone();
        self.dom.in_runtime(|| switch.set(view));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, logged_in: bool) -> ViewHarness {
    setup_view_harness_with_api(view, logged_in, FakeApi::default())
}

pub fn setup_view_harness_with_api(view: ViewKind, logged_in: bool, api: FakeApi) -> ViewHarness {
    let queries = QueryCache::new();
    let token = if logged_in {
        AuthToken::new("test-token").ok()
    } else {
        None
    };
    let quiz_handles = match view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        api: Arc::new(api),
        queries: queries.clone(),
        token,
    });

    let switch = ViewSwitch::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            switch: switch.clone(),
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        switch,
        queries,
        quiz_handles,
    }
}
