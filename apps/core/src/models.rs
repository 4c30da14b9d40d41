use crate::brain::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// Confidence reported by the interpret endpoint for every classification.
pub const INTERPRET_CONFIDENCE: f32 = 0.72;

/// Represents a lesson offered by the tutor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Lesson {
    /// Stable identifier (e.g., "voice-basics").
    pub id: String,
    /// Title read out to the learner.
    pub title: String,
    /// One-sentence summary of the lesson.
    pub description: String,
    /// Difficulty level. Open set; "beginner" when not given.
    #[serde(default = "default_level")]
    pub level: String,
    /// Ordered topic tags.
    #[serde(default)]
    pub topics: Vec<String>,
}

fn default_level() -> String {
    "beginner".to_string()
}

/// Body of `POST /api/interpret`.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct InterpretRequest {
    /// Caller-supplied user identifier, if any.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Speech-to-text output. Must contain something other than whitespace.
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub transcript: String,
    /// Free-form client context, stored alongside the interaction.
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

/// Strips surrounding whitespace, counting the ASCII separators U+001C..=U+001F as whitespace.
pub fn trim_transcript(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if trim_transcript(value).is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body returned by `POST /api/interpret`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InterpretResponse {
    pub ai_response: String,
    pub intent: Intent,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

fn default_confidence() -> f32 {
    0.7
}

/// A single transcript -> response exchange, persisted in the "interaction" collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Interaction {
    pub user_id: Option<String>,
    pub transcript: String,
    pub intent: Intent,
    pub ai_response: String,
    pub context: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Result of the `/test` database check.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
