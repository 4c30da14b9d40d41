//! Database Diagnostics Module
//!
//! Builds the human-readable report served by `GET /test`. Every failure is
//! folded into a status string; nothing here returns an error.

use crate::config::DatabaseEnv;
use crate::database::DocumentStore;
use crate::models::DiagnosticReport;
use tracing::{info, warn};

/// Maximum number of collection names included in a report.
const MAX_COLLECTIONS: usize = 10;

/// Maximum characters of an error message included in a report.
const MAX_ERROR_CHARS: usize = 50;

/// Checks the optional store and the database environment flags.
///
/// `store_error` is the message of a failed startup connection, if any.
pub async fn report(
    store: Option<&dyn DocumentStore>,
    store_error: Option<&str>,
    env: &DatabaseEnv,
) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match store {
        None => {
            report.database = match store_error {
                Some(e) => format!("❌ Error: {}", truncate(e)),
                None if env.url_set => "⚠️  Available but not initialized".to_string(),
                None => "❌ Database module not found".to_string(),
            };
        }
        Some(store) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match store.list_collection_names().await {
                Ok(mut collections) => {
                    collections.truncate(MAX_COLLECTIONS);
                    info!(
                        "Diagnostics: store '{}' lists {} collection(s)",
                        store.name(),
                        collections.len()
                    );
                    report.collections = collections;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    warn!("Diagnostics: store '{}' failed: {}", store.name(), e);
                    report.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
            }
        }
    }

    report.database_url = set_flag(env.url_set);
    report.database_name = set_flag(env.name_set);

    report
}

fn set_flag(set: bool) -> String {
    let flag = if set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

/// Keeps the first `MAX_ERROR_CHARS` characters.
fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
