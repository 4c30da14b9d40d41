//! # Brain Module
//!
//! Fast, non-LLM analysis of learner utterances.
//!
//! ## Components
//! - `intent`: ordered keyword rules mapping a transcript to an intent and canned reply

pub mod intent;

pub use intent::{Intent, IntentClassifier};
