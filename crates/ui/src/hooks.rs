//! Cache-backed data fetching for views.

use std::future::Future;

use dioxus::prelude::*;

use asl_core::model::{AuthToken, Lesson, User};
use services::{ApiError, QueryKey};

use crate::context::AppContext;
use crate::views::ViewError;

/// Snapshot of a query for one render.
///
/// `data` falls back to the cached value, then to `T::default()`, so views
/// can render it without checking for a first response.
#[derive(Clone)]
pub struct QueryResult<T: 'static> {
    pub data: T,
    pub error: Option<ViewError>,
    pub is_fetching: bool,
    resource: Resource<Result<T, ViewError>>,
}

impl<T: 'static> QueryResult<T> {
    /// Runs the request again; cached data stays visible meanwhile.
    pub fn refetch(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}

/// Issue `fetch` once per mount and mirror its result into the query cache.
pub fn use_query<T, F, Fut>(key: QueryKey, mut fetch: F) -> QueryResult<T>
where
    T: Clone + Default + Send + Sync + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_context::<AppContext>().query_cache();

    let resource = {
        let cache = cache.clone();
        let key = key.clone();
        use_resource(move || {
            let request = fetch();
            let cache = cache.clone();
            let key = key.clone();
            async move { cache.fetch(key, request).await.map_err(ViewError::from) }
        })
    };

    let is_fetching = matches!(resource.state().cloned(), UseResourceState::Pending);
    let (data, error) = match resource.value().read().as_ref() {
        Some(Ok(data)) => (data.clone(), None),
        Some(Err(err)) => (cache.get_or_default(&key), Some(*err)),
        None => (cache.get_or_default(&key), None),
    };

    QueryResult {
        data,
        error,
        is_fetching,
        resource,
    }
}

/// `GET /auth/me` for the given token. Without a token nothing is requested.
pub fn use_me(token: Option<AuthToken>) -> QueryResult<Option<User>> {
    let api = use_context::<AppContext>().auth_api();
    use_query(QueryKey::ME, move || {
        let api = api.clone();
        let token = token.clone();
        async move {
            match token {
                Some(token) => api.me(&token).await.map(Some),
                None => Ok(None),
            }
        }
    })
}

/// Lesson list, sent with the token when one is present.
pub fn use_lessons(token: Option<AuthToken>) -> QueryResult<Vec<Lesson>> {
    let api = use_context::<AppContext>().lesson_api();
    use_query(QueryKey::LESSONS, move || {
        let api = api.clone();
        let token = token.clone();
        async move { api.list_lessons(token.as_ref()).await }
    })
}
