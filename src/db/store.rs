use crate::db::models::{DbSnippetDetailRow, DbSnippetSummary};
use crate::error::StashError;
use sqlx::SqlitePool;
use tracing::debug;

const LIST_SNIPPETS: &str = r#"
    SELECT id, title, description, updated_at
    FROM snippets
    ORDER BY updated_at DESC
"#;

const SNIPPET_DETAIL_ROWS: &str = r#"
    SELECT s.id, s.title, s.description, s.updated_at,
           u.username, f.code, f.language
    FROM snippets s
    LEFT JOIN users u ON s.user_id = u.id
    LEFT JOIN fragments f ON f.snippet_id = s.id
    WHERE s.id = ?
    ORDER BY f.position
"#;

/// Read-only queries against the snippet tables.
///
/// Every call checks a connection out of the pool for the duration of one
/// query; the connection goes back to the pool when it is dropped, including
/// on error paths.
#[derive(Clone)]
pub struct SnippetStore {
    pool: SqlitePool,
}

impl SnippetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_summaries(&self) -> Result<Vec<DbSnippetSummary>, StashError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, DbSnippetSummary>(LIST_SNIPPETS)
            .fetch_all(&mut *conn)
            .await?;
        debug!(count = rows.len(), "Listed snippets");
        Ok(rows)
    }

    /// Flat join rows for one snippet, ordered by fragment position.
    /// An empty vec means the snippet does not exist.
    pub async fn detail_rows(&self, id: i64) -> Result<Vec<DbSnippetDetailRow>, StashError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, DbSnippetDetailRow>(SNIPPET_DETAIL_ROWS)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;
        debug!(id, rows = rows.len(), "Fetched snippet detail rows");
        Ok(rows)
    }

    /// Connectivity probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), StashError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(StashError::StoreUnavailable)?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(StashError::StoreUnavailable)?;
        Ok(())
    }
}
