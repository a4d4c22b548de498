use std::time::Duration;

use asl_core::model::AuthToken;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_LESSONS_PATH: &str = "/lessons";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub lessons_path: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lessons_path: DEFAULT_LESSONS_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_lessons_path(mut self, path: impl Into<String>) -> Self {
        self.lessons_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin JSON-over-HTTP wrapper rooted at the API base url.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` does not parse, or
    /// `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            raw: base_url.to_string(),
            source,
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute url for a resource path. Paths are always relative to the
    /// base url, leading slash or not.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the joined url does not parse.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|source| ApiError::InvalidBaseUrl {
            raw: joined,
            source,
        })
    }

    /// Issue a single GET and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for 401, `ApiError::HttpStatus` for
    /// other non-success statuses, `ApiError::Http` for transport failures and
    /// `ApiError::Decode` if the body does not match `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%url, authenticated = token.is_some(), "GET");

        let mut request = self.client.get(url.clone());
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token.bearer());
        }

        let response = request.send().await.map_err(|err| {
            warn!(%url, error = %err, "request failed");
            ApiError::Http(err)
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            warn!(%url, %status, "unexpected status");
            return Err(ApiError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| {
            warn!(%url, error = %err, "failed to decode response");
            ApiError::Decode(err)
        })
    }
}
