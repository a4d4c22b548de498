mod auth;
mod ids;
mod lesson;
mod question;
mod sign;
mod user;

pub use auth::{AuthToken, TokenError};
pub use ids::{LessonId, QuestionId};
pub use lesson::{Exercise, Lesson};
pub use question::{ChartQuestion, QuizQuestion, SKIP_ANSWER};
pub use sign::Sign;
pub use user::User;
