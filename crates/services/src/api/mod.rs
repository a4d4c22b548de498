mod client;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use asl_core::model::{AuthToken, Lesson, User};

use crate::error::ApiError;

pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL, DEFAULT_LESSONS_PATH, DEFAULT_TIMEOUT};

pub const ME_PATH: &str = "/auth/me";

/// `{ "data": ... }` wrapper used by the backend.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LessonsBody {
    Bare(Vec<Lesson>),
    Wrapped(Envelope<Vec<Lesson>>),
}

impl LessonsBody {
    fn into_lessons(self) -> Vec<Lesson> {
        match self {
            Self::Bare(lessons) => lessons,
            Self::Wrapped(envelope) => envelope.data,
        }
    }
}

/// Resolves the signed-in user.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the token is rejected.
    async fn me(&self, token: &AuthToken) -> Result<User, ApiError>;
}

/// Lists lessons available to the learner.
#[async_trait]
pub trait LessonApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body is not a lesson list.
    async fn list_lessons(&self, token: Option<&AuthToken>) -> Result<Vec<Lesson>, ApiError>;
}

/// Backend resources served over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: ApiClient,
    lessons_path: String,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns `ApiError` if the configured base url is invalid.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(&config.base_url, config.timeout)?,
            lessons_path: config.lessons_path.clone(),
        })
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn me(&self, token: &AuthToken) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.client.get(ME_PATH, Some(token)).await?;
        debug!(username = %envelope.data.username, "resolved current user");
        Ok(envelope.data)
    }
}

#[async_trait]
impl LessonApi for HttpApi {
    async fn list_lessons(&self, token: Option<&AuthToken>) -> Result<Vec<Lesson>, ApiError> {
        let body: LessonsBody = self.client.get(&self.lessons_path, token).await?;
        let lessons = body.into_lessons();
        debug!(count = lessons.len(), "fetched lessons");
        Ok(lessons)
    }
}
