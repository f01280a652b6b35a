use bytestash_schema::SnippetSummary;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbSnippetSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub updated_at: String,
}

impl From<DbSnippetSummary> for SnippetSummary {
    fn from(row: DbSnippetSummary) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            updated_at: row.updated_at,
        }
    }
}

/// One row of `snippets ⟕ users ⟕ fragments` for a single snippet.
///
/// The snippet columns repeat on every row; `username` is `None` for snippets
/// without an owner and `code`/`language` are `None` on the single row produced
/// for a snippet that has no fragments.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbSnippetDetailRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub updated_at: String,
    pub username: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
}
