use serde::{Deserialize, Serialize};

/// A single ASL vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    pub image: String,
    pub word: String,
    pub meaning: String,
}

impl Sign {
    #[must_use]
    pub fn new(image: impl Into<String>, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}
