//! Lessons authored in source for the ASL quiz chart.

use crate::model::{ChartQuestion, Exercise, Lesson, LessonId, QuestionId, Sign};

const HELLO_CHART_URL: &str =
    "https://lead-academy.org/blog/wp-content/uploads/2022/06/How-to-Sign-the-Alphabet-in-BSL.webp";
const THANK_YOU_CHART_URL: &str = "https://example.com/sign2.jpg";

fn chart_questions() -> Vec<ChartQuestion> {
    vec![
        ChartQuestion {
            id: QuestionId::new(1),
            image_url: HELLO_CHART_URL.to_string(),
            description: r#"The sign for "Hello""#.to_string(),
        },
        ChartQuestion {
            id: QuestionId::new(2),
            image_url: THANK_YOU_CHART_URL.to_string(),
            description: r#"The sign for "Thank you""#.to_string(),
        },
    ]
}

/// Every lesson shown on the quiz chart, in display order.
#[must_use]
pub fn quiz_chart() -> Vec<Lesson> {
    vec![
        Lesson {
            id: LessonId::new(1),
            number: 1,
            title: "Introduction to ASL".to_string(),
            slug: "introduction-to-asl".to_string(),
            background_color: "bg-blue-500".to_string(),
            background_image: "bg-curtain".to_string(),
            questions: chart_questions(),
            signs: vec![
                Sign::new("/path/to/sign-image1.jpg", "Hello", "A greeting or expression of goodwill."),
                Sign::new("/path/to/sign-image2.jpg", "Thank You", "An expression of gratitude."),
                Sign::new("/path/to/sign-image3.jpg", "Please", "A polite request."),
                Sign::new("/path/to/sign-image4.jpg", "Yes", "An affirmative response."),
                Sign::new("/path/to/sign-image5.jpg", "No", "A negative response."),
            ],
            exercise: Some(Exercise {
                title: "Alphabet in ASL".to_string(),
                slug: "alphabet-in-asl".to_string(),
            }),
        },
        Lesson {
            id: LessonId::new(2),
            number: 2,
            title: "Basic Conversations".to_string(),
            slug: "basic-conversations".to_string(),
            background_color: "bg-green-500".to_string(),
            background_image: "bg-circles".to_string(),
            questions: chart_questions(),
            signs: vec![
                Sign::new("/path/to/sign-image6.jpg", "Good Morning", "A greeting used in the morning."),
                Sign::new("/path/to/sign-image7.jpg", "Good Night", "A greeting used at night."),
                Sign::new("/path/to/sign-image8.jpg", "Sorry", "An apology."),
                Sign::new("/path/to/sign-image9.jpg", "Excuse Me", "Used to get someone's attention."),
                Sign::new("/path/to/sign-image10.jpg", "Help", "A request for assistance."),
            ],
            exercise: Some(Exercise {
                title: "Word Meanings".to_string(),
                slug: "word-meanings".to_string(),
            }),
        },
    ]
}

/// Looks up a chart lesson by its own slug or its exercise slug.
#[must_use]
pub fn find_lesson(slug: &str) -> Option<Lesson> {
    quiz_chart()
        .into_iter()
        .find(|lesson| lesson.matches_slug(slug))
}
