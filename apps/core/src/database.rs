use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

/// Collection-keyed JSON persistence used for interaction logging.
///
/// Implementations are free to be remote; callers treat every error as
/// non-fatal.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Logical database name, reported by diagnostics.
    fn name(&self) -> &str;

    /// Stores `document` in `collection` and returns the generated id.
    async fn create_document(&self, collection: &str, document: Value) -> Result<String, AppError>;

    /// Names of collections holding at least one document, ascending.
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// `DocumentStore` backed by a single SQLite table.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    name: String,
}

impl SqliteDocumentStore {
    pub async fn connect(url: &str, name: &str) -> Result<Self, AppError> {
        info!("Connecting document store '{}' at: {}", name, url);

        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::from_pool(pool, name).await
    }

    /// Wraps an existing pool, creating the documents table if needed.
    pub async fn from_pool(pool: SqlitePool, name: &str) -> Result<Self, AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body JSON NOT NULL,
                created_at INTEGER NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
            "#,
        )
        .execute(&pool)
        .await?;

        info!("Document store '{}' ready.", name);

        Ok(Self {
            pool,
            name: name.to_string(),
        })
    }

    #[cfg(test)]
    pub async fn count_documents(&self, collection: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM documents WHERE collection = ?",
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Documents of a collection, oldest first.
    #[cfg(test)]
    pub async fn find_documents(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let rows = sqlx::query_scalar::<_, Json<Value>>(
            r#"
            SELECT body
            FROM documents
            WHERE collection = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|Json(body)| body).collect())
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create_document(&self, collection: &str, document: Value) -> Result<String, AppError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(collection)
        .bind(Json(document))
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
