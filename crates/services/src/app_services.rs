use std::sync::Arc;

use crate::api::{ApiConfig, AuthApi, HttpApi, LessonApi};
use crate::error::ApiError;
use crate::query::QueryCache;

/// Assembles app-facing services around one HTTP backend.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<dyn AuthApi>,
    lessons: Arc<dyn LessonApi>,
    queries: QueryCache,
}

impl AppServices {
    /// Build services backed by the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be configured.
    pub fn http(config: &ApiConfig) -> Result<Self, ApiError> {
        let api = Arc::new(HttpApi::new(config)?);
        Ok(Self::new(api.clone(), api))
    }

    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, lessons: Arc<dyn LessonApi>) -> Self {
        Self {
            auth,
            lessons,
            queries: QueryCache::new(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<dyn AuthApi> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<dyn LessonApi> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn queries(&self) -> QueryCache {
        self.queries.clone()
    }
}
