//! Intent Classification using ordered keyword rules.
//!
//! Each rule is a keyword predicate tested against the lower-cased transcript
//! with plain substring containment. The first rule that matches wins, so the
//! rule order is the tie-break between overlapping keywords. No ML model
//! involved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Start a learning session (start, begin, go)
    #[serde(rename = "session.start")]
    SessionStart,
    /// Ask for the lesson list (list + lesson)
    #[serde(rename = "lesson.list")]
    LessonList,
    /// Arithmetic practice (math, add, plus, etc.)
    #[serde(rename = "lesson.math")]
    LessonMath,
    /// Pause or end the session (stop, end, pause)
    #[serde(rename = "session.stop")]
    SessionStop,
    /// Greeting (hello, hi, hey)
    #[serde(rename = "greeting")]
    Greeting,
    /// Anything else
    #[serde(rename = "general.query")]
    GeneralQuery,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Every intent, in rule order followed by the fallback.
    #[cfg(test)]
    pub const ALL: [Intent; 6] = [
        Intent::SessionStart,
        Intent::LessonList,
        Intent::LessonMath,
        Intent::SessionStop,
        Intent::Greeting,
        Intent::GeneralQuery,
    ];

    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::SessionStart => "session.start",
            Intent::LessonList => "lesson.list",
            Intent::LessonMath => "lesson.math",
            Intent::SessionStop => "session.stop",
            Intent::Greeting => "greeting",
            Intent::GeneralQuery => "general.query",
        }
    }

    /// Canned reply spoken back for this intent
    pub fn response(&self) -> &'static str {
        match self {
            Intent::SessionStart => {
                "Starting your learning session. Which lesson would you like? Say 'list lessons' to hear options."
            }
            Intent::LessonList => {
                "The lessons available are: Voice Control Basics, Math Fundamentals, and Science Reading Comprehension."
            }
            Intent::LessonMath => "Let's practice math. What is three plus five?",
            Intent::SessionStop => "Okay, pausing. Say 'resume' when you're ready.",
            Intent::Greeting => "Hello! I'm Echo, your hands-free tutor. How can I help?",
            Intent::GeneralQuery => "I heard you. How can I assist with your learning today?",
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Reply text bound to the intent
    pub response: String,
}

/// How a rule's keywords combine
#[derive(Debug, Clone, Copy)]
enum Keywords {
    /// At least one keyword appears
    Any(&'static [&'static str]),
    /// Every keyword appears
    All(&'static [&'static str]),
}

impl Keywords {
    fn matches(&self, text: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| text.contains(w)),
            Keywords::All(words) => words.iter().all(|w| text.contains(w)),
        }
    }
}

/// Rule definition for intent matching
struct IntentRule {
    intent: Intent,
    keywords: Keywords,
}

// Order is significant: "hello, let's start math" must resolve to SessionStart.
static RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        IntentRule {
            intent: Intent::SessionStart,
            keywords: Keywords::Any(&["start", "begin", "go"]),
        },
        IntentRule {
            intent: Intent::LessonList,
            keywords: Keywords::All(&["list", "lesson"]),
        },
        IntentRule {
            intent: Intent::LessonMath,
            keywords: Keywords::Any(&["math", "add", "subtract", "plus", "minus"]),
        },
        IntentRule {
            intent: Intent::SessionStop,
            keywords: Keywords::Any(&["stop", "end", "pause"]),
        },
        IntentRule {
            intent: Intent::Greeting,
            keywords: Keywords::Any(&["hello", "hi", "hey"]),
        },
    ]
});

/// Intent classifier using ordered keyword rules
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with the built-in rule order
    pub fn new() -> Self {
        Self {
            rules: RULES.as_slice(),
        }
    }

    /// Classify the intent of a transcript. Total: unmatched input falls back to `GeneralQuery`.
    pub fn classify(&self, transcript: &str) -> IntentResult {
        let lower = transcript.to_lowercase();

        let intent = self
            .rules
            .iter()
            .find(|rule| rule.keywords.matches(&lower))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::GeneralQuery);

        debug!("Classified transcript as {}", intent);

        IntentResult {
            intent,
            response: intent.response().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Start").intent, Intent::SessionStart);
        assert_eq!(classifier.classify("let's BEGIN").intent, Intent::SessionStart);
        assert_eq!(classifier.classify("ready, go").intent, Intent::SessionStart);
    }

    #[test]
    fn test_list_requires_both_keywords() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("list lessons").intent, Intent::LessonList);
        assert_eq!(classifier.classify("which lesson is this").intent, Intent::Greeting);
        assert_eq!(classifier.classify("shopping list").intent, Intent::GeneralQuery);
    }

    #[test]
    fn test_math_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("what is 2 plus 2");
        assert_eq!(result.intent, Intent::LessonMath);
        assert_eq!(result.response, "Let's practice math. What is three plus five?");

        assert_eq!(classifier.classify("minus").intent, Intent::LessonMath);
    }

    #[test]
    fn test_stop_detection() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("pause please").intent, Intent::SessionStop);
        assert_eq!(classifier.classify("STOP").intent, Intent::SessionStop);
    }

    #[test]
    fn test_greeting_detection() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("Hello there");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(
            result.response,
            "Hello! I'm Echo, your hands-free tutor. How can I help?"
        );
        assert_eq!(classifier.classify("hey echo").intent, Intent::Greeting);
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = IntentClassifier::new();

        assert_eq!(
            classifier.classify("hello, let's start math").intent,
            Intent::SessionStart
        );
        assert_eq!(classifier.classify("hello math").intent, Intent::LessonMath);
        assert_eq!(classifier.classify("list lessons then stop").intent, Intent::LessonList);
    }

    #[test]
    fn test_substring_matching() {
        let classifier = IntentClassifier::new();

        // "go" inside "good", "add" inside "address"
        assert_eq!(classifier.classify("good").intent, Intent::SessionStart);
        assert_eq!(classifier.classify("my address").intent, Intent::LessonMath);
    }

    #[test]
    fn test_fallback() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("");
        assert_eq!(result.intent, Intent::GeneralQuery);

        let result = classifier.classify("tell me a fact");
        assert_eq!(result.intent, Intent::GeneralQuery);
        assert_eq!(
            result.response,
            "I heard you. How can I assist with your learning today?"
        );
    }

    #[test]
    fn test_labels_serialize_as_wire_form() {
        for intent in Intent::ALL {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.label()));
        }
    }
}
