//! Built-in lesson catalog.

use crate::models::Lesson;
use std::sync::LazyLock;

static LESSONS: LazyLock<Vec<Lesson>> = LazyLock::new(|| {
    vec![
        lesson(
            "voice-basics",
            "Voice Control Basics",
            "Learn to navigate EchoLearn using your voice.",
            "beginner",
            &["speech-to-text", "commands", "accessibility"],
        ),
        lesson(
            "math-fundamentals",
            "Math Fundamentals",
            "Practice arithmetic hands-free with guided prompts.",
            "beginner",
            &["numbers", "addition", "subtraction"],
        ),
        lesson(
            "science-reading",
            "Science Reading Comprehension",
            "Listen to short passages and answer questions by voice.",
            "intermediate",
            &["comprehension", "listening"],
        ),
    ]
});

fn lesson(id: &str, title: &str, description: &str, level: &str, topics: &[&str]) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        level: level.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

/// All lessons, in presentation order.
pub fn lessons() -> &'static [Lesson] {
    LESSONS.as_slice()
}
