use serde::{Deserialize, Serialize};

use crate::model::ids::LessonId;
use crate::model::question::ChartQuestion;
use crate::model::sign::Sign;

/// Quiz exercise attached to a lesson on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub title: String,
    pub slug: String,
}

/// A named unit of signs to learn plus its quiz material.
///
/// Lessons come either from the static chart or from the lesson endpoint,
/// which uses camelCase keys. Everything past the heading is optional on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub number: u32,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub questions: Vec<ChartQuestion>,
    #[serde(default)]
    pub signs: Vec<Sign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

impl Lesson {
    /// Slug of the quiz this lesson links to: the exercise when present,
    /// otherwise the lesson itself.
    #[must_use]
    pub fn quiz_slug(&self) -> &str {
        self.exercise
            .as_ref()
            .map_or(self.slug.as_str(), |exercise| exercise.slug.as_str())
    }

    #[must_use]
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug == slug
            || self
                .exercise
                .as_ref()
                .is_some_and(|exercise| exercise.slug == slug)
    }
}
