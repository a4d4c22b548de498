mod lesson_vm;
mod quiz_vm;

pub use lesson_vm::{LessonCardVm, SignRowVm, map_lesson_card};
pub use quiz_vm::{
    ChoiceStyle, QuestionState, QuizEffect, QuizIntent, QuizKey, QuizPhase, QuizVm, Sound,
};
