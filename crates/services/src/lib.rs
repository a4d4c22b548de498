#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod error;
pub mod query;
pub mod quiz;

pub use api::{ApiClient, ApiConfig, AuthApi, HttpApi, LessonApi};
pub use app_services::AppServices;
pub use error::ApiError;
pub use query::{QueryCache, QueryKey};
pub use quiz::{FixedQuestion, QuestionGenerator, QuizSession, SignQuestions};
