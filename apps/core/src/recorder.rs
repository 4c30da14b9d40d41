//! Best-effort persistence of interpret exchanges.

use crate::database::DocumentStore;
use crate::error::AppError;
use crate::models::Interaction;
use std::sync::Arc;
use tracing::{debug, warn};

/// Collection that receives interaction records.
pub const INTERACTION_COLLECTION: &str = "interaction";

/// Forwards interactions to an optional document store. Never fails.
#[derive(Clone, Default)]
pub struct InteractionRecorder {
    store: Option<Arc<dyn DocumentStore>>,
}

impl InteractionRecorder {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    /// Whether a store was configured at startup.
    pub fn is_available(&self) -> bool {
        self.store.is_some()
    }

    pub async fn record(&self, interaction: &Interaction) {
        let Some(store) = &self.store else {
            debug!("No document store configured, interaction not persisted");
            return;
        };

        match persist(store.as_ref(), interaction).await {
            Ok(id) => debug!("Persisted interaction {}", id),
            Err(e) => warn!("Failed to persist interaction: {}", e),
        }
    }
}

async fn persist(store: &dyn DocumentStore, interaction: &Interaction) -> Result<String, AppError> {
    let document = serde_json::to_value(interaction)?;
    store.create_document(INTERACTION_COLLECTION, document).await
}
