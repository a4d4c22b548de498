//! Progress and scoring arithmetic for a single quiz attempt.

/// Progress value at which a quiz attempt is finished.
pub const PROGRESS_COMPLETE: u8 = 100;

/// XP awarded per correct answer.
pub const XP_PER_CORRECT: u32 = 10;

/// Extra XP for finishing without a single incorrect answer.
pub const PERFECT_BONUS_XP: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Fixed progress steps applied per answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRules {
    pub increment: u8,
    pub decrement: u8,
}

impl Default for ProgressRules {
    fn default() -> Self {
        Self {
            increment: 20,
            decrement: 10,
        }
    }
}

/// Score summary computed when an attempt completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    /// Percentage of checked answers that were correct.
    pub score: u8,
    pub xp: u32,
    pub num_correct: u32,
    pub num_incorrect: u32,
}

/// Running counters for one attempt.
///
/// Progress stays within `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizProgress {
    rules: ProgressRules,
    progress: u8,
    num_correct: u32,
    num_incorrect: u32,
}

impl QuizProgress {
    #[must_use]
    pub fn new(rules: ProgressRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Starts from an arbitrary progress value, clamped to 100.
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress.min(PROGRESS_COMPLETE);
        self
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    #[must_use]
    pub fn num_incorrect(&self) -> u32 {
        self.num_incorrect
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= PROGRESS_COMPLETE
    }

    pub fn record(&mut self, outcome: AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct => {
                self.num_correct = self.num_correct.saturating_add(1);
                self.progress = self
                    .progress
                    .saturating_add(self.rules.increment)
                    .min(PROGRESS_COMPLETE);
            }
            AnswerOutcome::Incorrect => {
                self.num_incorrect = self.num_incorrect.saturating_add(1);
                self.progress = self.progress.saturating_sub(self.rules.decrement);
            }
        }
    }

    #[must_use]
    pub fn score(&self) -> QuizScore {
        let answered = u64::from(self.num_correct) + u64::from(self.num_incorrect);
        let score = if answered == 0 {
            0
        } else {
            let percent = u64::from(self.num_correct) * 100 / answered;
            u8::try_from(percent).unwrap_or(100)
        };
        let mut xp = self.num_correct.saturating_mul(XP_PER_CORRECT);
        if self.num_correct > 0 && self.num_incorrect == 0 {
            xp = xp.saturating_add(PERFECT_BONUS_XP);
        }
        QuizScore {
            score,
            xp,
            num_correct: self.num_correct,
            num_incorrect: self.num_incorrect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answers_climb_and_clamp_at_complete() {
        let mut progress = QuizProgress::new(ProgressRules::default()).with_progress(90);
        progress.record(AnswerOutcome::Correct);
        assert_eq!(progress.progress(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn incorrect_answers_never_go_below_zero() {
        let mut progress = QuizProgress::new(ProgressRules::default()).with_progress(5);
        progress.record(AnswerOutcome::Incorrect);
        assert_eq!(progress.progress(), 0);
        assert_eq!(progress.num_incorrect(), 1);
    }

    #[test]
    fn with_progress_clamps_input() {
        let progress = QuizProgress::default().with_progress(250);
        assert_eq!(progress.progress(), 100);
    }

    #[test]
    fn perfect_run_earns_bonus() {
        let mut progress = QuizProgress::new(ProgressRules::default());
        for _ in 0..5 {
            progress.record(AnswerOutcome::Correct);
        }
        let score = progress.score();
        assert_eq!(score.score, 100);
        assert_eq!(score.xp, 5 * XP_PER_CORRECT + PERFECT_BONUS_XP);
    }

    #[test]
    fn mixed_run_scores_percentage_without_bonus() {
        let mut progress = QuizProgress::new(ProgressRules::default());
        progress.record(AnswerOutcome::Correct);
        progress.record(AnswerOutcome::Incorrect);
        progress.record(AnswerOutcome::Correct);
        progress.record(AnswerOutcome::Incorrect);
        let score = progress.score();
        assert_eq!(score.score, 50);
        assert_eq!(score.xp, 2 * XP_PER_CORRECT);
        assert_eq!(progress.progress(), 20);
    }

    #[test]
    fn empty_attempt_scores_zero() {
        assert_eq!(QuizProgress::default().score(), QuizScore::default());
    }
}
