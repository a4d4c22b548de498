pub mod components;
mod home;
mod lessons;
mod login;
mod quiz;
mod state;

pub use home::HomeView;
pub use lessons::LessonsView;
pub use login::LoginView;
pub use quiz::QuizView;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
