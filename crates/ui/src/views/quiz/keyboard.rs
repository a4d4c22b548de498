use dioxus::prelude::Key;

use crate::vm::QuizKey;

/// Maps a key press to the quiz keys; everything else is ignored.
pub(super) fn quiz_key(key: &Key) -> Option<QuizKey> {
    match key {
        Key::Enter => Some(QuizKey::Enter),
        Key::Character(value) => match value.as_str() {
            "1" => Some(QuizKey::Digit(1)),
            "2" => Some(QuizKey::Digit(2)),
            "3" => Some(QuizKey::Digit(3)),
            "4" => Some(QuizKey::Digit(4)),
            _ => None,
        },
        _ => None,
    }
}
