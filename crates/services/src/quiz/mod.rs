mod generator;
mod session;

pub use generator::{FixedQuestion, MAX_CHOICES, QuestionGenerator, SignQuestions};
pub use session::QuizSession;
