use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use asl_core::model::{QuizQuestion, Sign};

/// Maximum number of choices shown per question; one per digit key.
pub const MAX_CHOICES: usize = 4;

/// Source of quiz questions for one attempt.
pub trait QuestionGenerator: Send {
    fn generate(&mut self) -> QuizQuestion;
}

/// Always yields the same demonstration question.
#[derive(Debug, Clone, Default)]
pub struct FixedQuestion;

impl FixedQuestion {
    #[must_use]
    pub fn question() -> QuizQuestion {
        QuizQuestion {
            question_direction: "Demo Question Direction".to_string(),
            question_subject: "Demo Question Subject".to_string(),
            answer: "A".to_string(),
            choices: ["A", "B", "C", "D"].map(String::from).to_vec(),
        }
    }
}

impl QuestionGenerator for FixedQuestion {
    fn generate(&mut self) -> QuizQuestion {
        Self::question()
    }
}

/// Asks for the word matching a sign's meaning, with distractors drawn
/// from the other signs of the lesson.
pub struct SignQuestions {
    signs: Vec<Sign>,
    rng: StdRng,
}

impl SignQuestions {
    /// Returns `None` when fewer than two distinct words are available.
    #[must_use]
    pub fn new(signs: Vec<Sign>) -> Option<Self> {
        Self::with_rng(signs, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_seed(signs: Vec<Sign>, seed: u64) -> Option<Self> {
        Self::with_rng(signs, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut signs: Vec<Sign>, rng: StdRng) -> Option<Self> {
        let mut seen = Vec::with_capacity(signs.len());
        signs.retain(|sign| {
            if seen.contains(&sign.word) {
                false
            } else {
                seen.push(sign.word.clone());
                true
            }
        });
        (signs.len() >= 2).then_some(Self { signs, rng })
    }
}

impl QuestionGenerator for SignQuestions {
    fn generate(&mut self) -> QuizQuestion {
        let mut order: Vec<usize> = (0..self.signs.len()).collect();
        order.shuffle(&mut self.rng);

        let target = &self.signs[order[0]];
        let mut choices: Vec<String> = order
            .iter()
            .take(MAX_CHOICES)
            .map(|&index| self.signs[index].word.clone())
            .collect();
        choices.shuffle(&mut self.rng);

        QuizQuestion {
            question_direction: "Which word matches this sign:".to_string(),
            question_subject: target.meaning.clone(),
            answer: target.word.clone(),
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signs(words: &[&str]) -> Vec<Sign> {
        words
            .iter()
            .map(|word| Sign::new("/img.jpg", *word, format!("meaning of {word}")))
            .collect()
    }

    #[test]
    fn fixed_question_is_the_demo_shape() {
        let question = FixedQuestion.generate();
        assert_eq!(question.answer, "A");
        assert_eq!(question.choices, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn sign_questions_need_two_distinct_words() {
        assert!(SignQuestions::with_seed(signs(&["Hello"]), 1).is_none());
        assert!(SignQuestions::with_seed(signs(&["Hello", "Hello"]), 1).is_none());
        assert!(SignQuestions::with_seed(signs(&["Hello", "No"]), 1).is_some());
    }

    #[test]
    fn generated_choices_contain_answer_once() {
        let mut generator =
            SignQuestions::with_seed(signs(&["Hello", "Thank You", "Please", "Yes", "No"]), 7)
                .expect("generator");
        for _ in 0..20 {
            let question = generator.generate();
            assert_eq!(question.choices.len(), MAX_CHOICES);
            let hits = question
                .choices
                .iter()
                .filter(|choice| **choice == question.answer)
                .count();
            assert_eq!(hits, 1);
            assert_eq!(question.question_subject, format!("meaning of {}", question.answer));
        }
    }

    #[test]
    fn small_lessons_offer_fewer_choices() {
        let mut generator =
            SignQuestions::with_seed(signs(&["Yes", "No"]), 3).expect("generator");
        let question = generator.generate();
        assert_eq!(question.choices.len(), 2);
    }
}
