use crate::brain::IntentClassifier;
use crate::catalog;
use crate::config::DatabaseEnv;
use crate::database::DocumentStore;
use crate::diagnostics;
use crate::error::AppError;
use crate::models::{
    trim_transcript, DiagnosticReport, Interaction, InterpretRequest, InterpretResponse, Lesson,
    INTERPRET_CONFIDENCE,
};
use crate::recorder::InteractionRecorder;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Map;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use validator::Validate;

pub const TRANSCRIPT_REQUIRED: &str = "Transcript is required";

pub type SharedState = Arc<AppState>;

/// Everything handlers need. Built once in `main` and never mutated.
pub struct AppState {
    pub classifier: IntentClassifier,
    pub recorder: InteractionRecorder,
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Why the configured store could not be opened at startup.
    pub store_error: Option<String>,
    pub database_env: DatabaseEnv,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, database_env: DatabaseEnv) -> SharedState {
        Arc::new(Self {
            classifier: IntentClassifier::new(),
            recorder: InteractionRecorder::new(store.clone()),
            store,
            store_error: None,
            database_env,
        })
    }

    /// State for a configured store that failed to connect; persistence is disabled.
    pub fn with_store_error(store_error: String, database_env: DatabaseEnv) -> SharedState {
        Arc::new(Self {
            classifier: IntentClassifier::new(),
            recorder: InteractionRecorder::new(None),
            store: None,
            store_error: Some(store_error),
            database_env,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/test", get(test_database))
        .route("/api/lessons", get(list_lessons))
        .route("/api/interpret", post(interpret))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "EchoLearn Backend Running".to_string(),
    })
}

async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from EchoLearn backend!".to_string(),
    })
}

async fn test_database(State(state): State<SharedState>) -> Json<DiagnosticReport> {
    Json(
        diagnostics::report(
            state.store.as_deref(),
            state.store_error.as_deref(),
            &state.database_env,
        )
        .await,
    )
}

async fn list_lessons() -> Json<&'static [Lesson]> {
    Json(catalog::lessons())
}

async fn interpret(
    State(state): State<SharedState>,
    payload: Result<Json<InterpretRequest>, JsonRejection>,
) -> Result<Json<InterpretResponse>, AppError> {
    let Json(req) = payload?;
    req.validate()
        .map_err(|_| AppError::BadRequest(TRANSCRIPT_REQUIRED.to_string()))?;

    let transcript = trim_transcript(&req.transcript).to_string();
    let result = state.classifier.classify(&transcript);
    info!(
        "Interpret: user={} intent={}",
        req.user_id.as_deref().unwrap_or("-"),
        result.intent
    );

    let interaction = Interaction {
        user_id: req.user_id,
        transcript,
        intent: result.intent,
        ai_response: result.response.clone(),
        context: req.context.unwrap_or_default(),
        created_at: Utc::now(),
    };
    state.recorder.record(&interaction).await;

    Ok(Json(InterpretResponse {
        ai_response: result.response,
        intent: result.intent,
        confidence: INTERPRET_CONFIDENCE,
        metadata: Map::new(),
    }))
}
