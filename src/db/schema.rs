//! SQL DDL of the snippet store.
//!
//! The service only reads these tables; the DDL is used to set up local and
//! test databases.

use sqlx::SqlitePool;

/// SQLite schema includes:
/// - `users` table (display names only)
/// - `snippets` table (optionally owned by a user)
/// - `fragments` table (ordered code blocks of a snippet)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY NOT NULL,
    username TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT NULL,
    updated_at TEXT NOT NULL,
    user_id INTEGER NULL REFERENCES users(id)
);

CREATE INDEX IF NOT EXISTS idx_snippets_updated_at ON snippets(updated_at);

CREATE TABLE IF NOT EXISTS fragments (
    id INTEGER PRIMARY KEY NOT NULL,
    snippet_id INTEGER NOT NULL REFERENCES snippets(id),
    language TEXT NULL,
    code TEXT NULL,
    position INTEGER NULL
);

CREATE INDEX IF NOT EXISTS idx_fragments_snippet ON fragments(snippet_id, position);
"#;

/// Executes [`SQLITE_INIT`] statement by statement against a writable pool.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
