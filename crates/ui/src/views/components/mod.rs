mod button;
mod chart;
mod complete;
mod feedback;
mod lesson;
mod loading;
mod progress;
mod redirect;

pub use button::Button;
pub use chart::QuizChart;
pub use complete::CompleteScreen;
pub use feedback::FeedbackMessage;
pub use lesson::{LessonContainer, QuizLesson};
pub use loading::Loading;
pub use progress::ProgressBar;
pub use redirect::Redirect;
