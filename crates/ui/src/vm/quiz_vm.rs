use asl_core::model::{QuizQuestion, SKIP_ANSWER};
use asl_core::quiz::{AnswerOutcome, QuizScore};
use services::QuizSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    Correct,
    Incorrect,
}

impl From<AnswerOutcome> for QuestionState {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct => Self::Correct,
            AnswerOutcome::Incorrect => Self::Incorrect,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Checked(QuestionState),
    Complete,
}

/// Keys the quiz reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizKey {
    /// One-based choice position.
    Digit(u8),
    Enter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Check,
    Skip,
    Next,
    Key(QuizKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Correct,
    Incorrect,
}

/// Side effect the view performs after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    PlaySound(Sound),
    UpdateExperience { xp: u32 },
    NavigateBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceStyle {
    Idle,
    Selected,
    /// The right answer, shown after an incorrect check.
    Revealed,
    Locked,
}

impl ChoiceStyle {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ChoiceStyle::Idle => "quiz-choice",
            ChoiceStyle::Selected => "quiz-choice selected-choice",
            ChoiceStyle::Revealed => "quiz-choice correct-choice",
            ChoiceStyle::Locked => "quiz-choice quiz-choice--locked",
        }
    }
}

/// State machine behind the quiz page.
///
/// Every input goes through one transition method and yields at most one
/// effect. Inputs that do not apply to the current phase are ignored.
pub struct QuizVm {
    session: QuizSession,
    question: QuizQuestion,
    selected_option: Option<String>,
    question_state: Option<QuestionState>,
    complete: bool,
    summary: Option<QuizScore>,
}

impl QuizVm {
    #[must_use]
    pub fn new(mut session: QuizSession) -> Self {
        let question = session.generate_question();
        Self {
            session,
            question,
            selected_option: None,
            question_state: None,
            complete: false,
            summary: None,
        }
    }

    #[must_use]
    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn question_state(&self) -> Option<QuestionState> {
        self.question_state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.session.progress()
    }

    /// Score summary, available once the attempt is complete.
    #[must_use]
    pub fn summary(&self) -> Option<QuizScore> {
        self.summary
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.complete {
            return QuizPhase::Complete;
        }
        match self.question_state {
            Some(state) => QuizPhase::Checked(state),
            None => QuizPhase::Answering,
        }
    }

    #[must_use]
    pub fn can_check(&self) -> bool {
        self.phase() == QuizPhase::Answering && self.selected_option.is_some()
    }

    #[must_use]
    pub fn choice_style(&self, choice: &str) -> ChoiceStyle {
        if self.selected_option.as_deref() == Some(choice) {
            return ChoiceStyle::Selected;
        }
        match self.question_state {
            None => ChoiceStyle::Idle,
            Some(QuestionState::Incorrect) if self.question.is_correct(choice) => {
                ChoiceStyle::Revealed
            }
            Some(_) => ChoiceStyle::Locked,
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) -> Option<QuizEffect> {
        match intent {
            QuizIntent::Select(choice) => {
                self.select(&choice);
                None
            }
            QuizIntent::Check => self.check(),
            QuizIntent::Skip => self.skip(),
            QuizIntent::Next => self.next(),
            QuizIntent::Key(key) => self.key(key),
        }
    }

    /// Marks `choice` as selected while the question is unchecked.
    pub fn select(&mut self, choice: &str) {
        if self.phase() != QuizPhase::Answering {
            return;
        }
        if self.question.choices.iter().any(|item| item == choice) {
            self.selected_option = Some(choice.to_string());
        }
    }

    pub fn check(&mut self) -> Option<QuizEffect> {
        if self.phase() != QuizPhase::Answering {
            return None;
        }
        let answer = self.selected_option.clone()?;
        Some(self.check_answer(&answer))
    }

    pub fn skip(&mut self) -> Option<QuizEffect> {
        if self.phase() != QuizPhase::Answering {
            return None;
        }
        Some(self.check_answer(SKIP_ANSWER))
    }

    /// Moves on from a checked question: a fresh question below 100%
    /// progress, the completion screen at or above it.
    pub fn next(&mut self) -> Option<QuizEffect> {
        if !matches!(self.phase(), QuizPhase::Checked(_)) {
            return None;
        }
        if !self.session.is_complete() {
            self.question = self.session.generate_question();
            self.selected_option = None;
            self.question_state = None;
            return None;
        }

        let summary = self.session.score_and_xp();
        self.summary = Some(summary);
        self.complete = true;
        self.question_state = None;
        Some(QuizEffect::UpdateExperience { xp: summary.xp })
    }

    pub fn key(&mut self, key: QuizKey) -> Option<QuizEffect> {
        match key {
            QuizKey::Digit(position @ 1..=4) => {
                if self.phase() == QuizPhase::Answering {
                    if let Some(choice) = self.question.choice_at(usize::from(position)) {
                        self.selected_option = Some(choice.to_string());
                    }
                }
                None
            }
            QuizKey::Digit(_) => None,
            QuizKey::Enter => match self.phase() {
                QuizPhase::Complete => Some(QuizEffect::NavigateBack),
                QuizPhase::Answering => self.check(),
                QuizPhase::Checked(_) => self.next(),
            },
        }
    }

    fn check_answer(&mut self, answer: &str) -> QuizEffect {
        let outcome = AnswerOutcome::from_correct(self.question.is_correct(answer));
        self.session.record(outcome);
        self.question_state = Some(outcome.into());
        QuizEffect::PlaySound(match outcome {
            AnswerOutcome::Correct => Sound::Correct,
            AnswerOutcome::Incorrect => Sound::Incorrect,
        })
    }
}
