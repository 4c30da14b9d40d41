//! Interaction Recorder and Diagnostics Tests
//!
//! Persistence is best effort: these tests pin down that failures stay local.

use super::fixtures::{create_test_store, FailingStore};
use crate::brain::Intent;
use crate::config::DatabaseEnv;
use crate::database::DocumentStore;
use crate::diagnostics;
use crate::models::Interaction;
use crate::recorder::{InteractionRecorder, INTERACTION_COLLECTION};
use chrono::Utc;
use serde_json::{json, Map};
use std::sync::Arc;

fn sample_interaction() -> Interaction {
    let mut context = Map::new();
    context.insert("lesson".to_string(), json!("math-fundamentals"));

    Interaction {
        user_id: Some("learner-1".to_string()),
        transcript: "what is 2 plus 2".to_string(),
        intent: Intent::LessonMath,
        ai_response: Intent::LessonMath.response().to_string(),
        context,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_record_persists_interaction() {
    let (store, _dir) = create_test_store().await;
    let store = Arc::new(store);
    let recorder = InteractionRecorder::new(Some(store.clone()));

    assert!(recorder.is_available());
    recorder.record(&sample_interaction()).await;

    let docs = store.find_documents(INTERACTION_COLLECTION).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["user_id"], "learner-1");
    assert_eq!(docs[0]["intent"], "lesson.math");
    assert_eq!(docs[0]["context"]["lesson"], "math-fundamentals");
    assert!(docs[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_record_without_store_is_noop() {
    let recorder = InteractionRecorder::new(None);

    assert!(!recorder.is_available());
    recorder.record(&sample_interaction()).await;
}

#[tokio::test]
async fn test_record_swallows_store_failure() {
    let recorder = InteractionRecorder::new(Some(Arc::new(FailingStore)));

    assert!(recorder.is_available());
    // Must return normally
    recorder.record(&sample_interaction()).await;
}

#[tokio::test]
async fn test_report_with_working_store() {
    let (store, _dir) = create_test_store().await;
    for i in 0..12 {
        store
            .create_document(&format!("c{:02}", i), json!({}))
            .await
            .unwrap();
    }

    let env = DatabaseEnv {
        url_set: true,
        name_set: false,
    };
    let report = diagnostics::report(Some(&store), None, &env).await;

    assert_eq!(report.database, "✅ Connected & Working");
    assert_eq!(report.connection_status, "Connected");
    assert_eq!(report.database_url, "✅ Set");
    assert_eq!(report.database_name, "❌ Not Set");
    assert_eq!(report.collections.len(), 10);
    assert_eq!(report.collections[0], "c00");
    assert_eq!(report.collections[9], "c09");
}

#[tokio::test]
async fn test_report_with_failing_store() {
    let report = diagnostics::report(Some(&FailingStore), None, &DatabaseEnv::default()).await;

    let prefix = "⚠️  Connected but Error: ";
    assert!(report.database.starts_with(prefix));
    let detail = &report.database[prefix.len()..];
    assert!(detail.starts_with("Database error:"));
    assert!(detail.chars().count() <= 50);
    assert_eq!(report.connection_status, "Connected");
    assert!(report.collections.is_empty());
}
