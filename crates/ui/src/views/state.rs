use services::ApiError;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unauthorized,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unauthorized => "Your session has expired. Please log in again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<ApiError> for ViewError {
    fn from(err: ApiError) -> Self {
        warn!(error = %err, "request failed");
        match err {
            ApiError::Unauthorized => ViewError::Unauthorized,
            _ => ViewError::Unknown,
        }
    }
}
