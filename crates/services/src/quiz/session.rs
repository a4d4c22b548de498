use asl_core::model::{Lesson, QuizQuestion};
use asl_core::quiz::{AnswerOutcome, ProgressRules, QuizProgress, QuizScore};
use tracing::debug;

use super::generator::{FixedQuestion, QuestionGenerator, SignQuestions};

/// One quiz attempt: where questions come from and how far the learner got.
///
/// Created when the quiz view mounts and dropped when it unmounts or the
/// learner starts over.
pub struct QuizSession {
    generator: Box<dyn QuestionGenerator>,
    progress: QuizProgress,
}

impl QuizSession {
    #[must_use]
    pub fn new(generator: Box<dyn QuestionGenerator>, rules: ProgressRules) -> Self {
        Self {
            generator,
            progress: QuizProgress::new(rules),
        }
    }

    /// Demonstration attempt that repeats the fixed question.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Box::new(FixedQuestion), ProgressRules::default())
    }

    /// Attempt built from a lesson's signs, falling back to the demo
    /// question when the lesson has too few signs.
    #[must_use]
    pub fn for_lesson(lesson: &Lesson) -> Self {
        match SignQuestions::new(lesson.signs.clone()) {
            Some(generator) => Self::new(Box::new(generator), ProgressRules::default()),
            None => {
                debug!(slug = %lesson.slug, "lesson has too few signs, using demo questions");
                Self::demo()
            }
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = self.progress.with_progress(progress);
        self
    }

    pub fn generate_question(&mut self) -> QuizQuestion {
        self.generator.generate()
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress.progress()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    pub fn record(&mut self, outcome: AnswerOutcome) {
        self.progress.record(outcome);
        debug!(
            ?outcome,
            progress = self.progress.progress(),
            correct = self.progress.num_correct(),
            incorrect = self.progress.num_incorrect(),
            "answer recorded"
        );
    }

    #[must_use]
    pub fn score_and_xp(&self) -> QuizScore {
        self.progress.score()
    }
}
