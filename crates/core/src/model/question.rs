use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

/// Answer submitted when the learner skips a question. Never matches a real answer.
pub const SKIP_ANSWER: &str = "skip";

/// Image prompt shown on the quiz chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuestion {
    pub id: QuestionId,
    pub image_url: String,
    pub description: String,
}

/// Multiple choice question driven by the quiz runner.
///
/// Rendered as `{question_direction} "{question_subject}"` followed by the
/// choices in order. Digit keys address `choices` one-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_direction: String,
    pub question_subject: String,
    pub answer: String,
    pub choices: Vec<String>,
}

impl QuizQuestion {
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }

    /// Choice addressed by a one-based position, as typed on the keyboard.
    #[must_use]
    pub fn choice_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> QuizQuestion {
        QuizQuestion {
            question_direction: "Pick".into(),
            question_subject: "letter".into(),
            answer: "A".into(),
            choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        }
    }

    #[test]
    fn skip_is_never_correct() {
        assert!(!abcd().is_correct(SKIP_ANSWER));
        assert!(abcd().is_correct("A"));
    }

    #[test]
    fn choice_at_is_one_based() {
        let question = abcd();
        assert_eq!(question.choice_at(0), None);
        assert_eq!(question.choice_at(1), Some("A"));
        assert_eq!(question.choice_at(4), Some("D"));
        assert_eq!(question.choice_at(5), None);
    }

    #[test]
    fn chart_question_reads_camel_case() {
        let question: ChartQuestion = serde_json::from_str(
            r#"{"id": 2, "imageUrl": "https://example.com/sign2.jpg", "description": "Thank you"}"#,
        )
        .unwrap();
        assert_eq!(question.id, QuestionId::new(2));
        assert_eq!(question.image_url, "https://example.com/sign2.jpg");
    }
}
