use std::sync::Arc;

use dioxus::prelude::*;

use asl_core::model::AuthToken;
use services::{AuthApi, LessonApi, QueryCache};

pub trait UiApp: Send + Sync {
    fn auth_api(&self) -> Arc<dyn AuthApi>;
    fn lesson_api(&self) -> Arc<dyn LessonApi>;
    fn query_cache(&self) -> QueryCache;

    /// Token the app was launched with, if any.
    fn initial_token(&self) -> Option<AuthToken>;
}

#[derive(Clone)]
pub struct AppContext {
    auth_api: Arc<dyn AuthApi>,
    lesson_api: Arc<dyn LessonApi>,
    queries: QueryCache,
    initial_token: Option<AuthToken>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth_api: app.auth_api(),
            lesson_api: app.lesson_api(),
            queries: app.query_cache(),
            initial_token: app.initial_token(),
        }
    }

    #[must_use]
    pub fn auth_api(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.auth_api)
    }

    #[must_use]
    pub fn lesson_api(&self) -> Arc<dyn LessonApi> {
        Arc::clone(&self.lesson_api)
    }

    #[must_use]
    pub fn query_cache(&self) -> QueryCache {
        self.queries.clone()
    }

    #[must_use]
    pub fn initial_token(&self) -> Option<AuthToken> {
        self.initial_token.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Who is signed in, shared by every view under the root component.
///
/// Reads subscribe the calling component, so signing in or out re-renders
/// the sidebar and guarded views.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthSession {
    token: Signal<Option<AuthToken>>,
}

impl AuthSession {
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.token.read().clone()
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn login(&self, token: AuthToken) {
        let mut slot = self.token;
        slot.set(Some(token));
    }

    pub fn logout(&self) {
        let mut slot = self.token;
        slot.set(None);
    }
}

/// Installs the session for the subtree. Call once from the root component.
pub fn use_auth_provider(initial: Option<AuthToken>) -> AuthSession {
    use_context_provider(|| AuthSession {
        token: Signal::new(initial),
    })
}

#[must_use]
pub fn use_auth() -> AuthSession {
    use_context::<AuthSession>()
}
