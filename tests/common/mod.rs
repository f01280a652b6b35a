#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use bytestash::config::CorsConfig;
use bytestash::db::{SnippetStore, apply_schema, connect_lazy};
use bytestash::server::router::{StashState, stash_router};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const API_KEY: &str = "test-api-key";

/// Database file under the system temp dir, removed (with its journal files) on drop.
pub struct TempDb {
    path: PathBuf,
}

impl Deref for TempDb {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = fs::remove_file(file);
        }
    }
}

/// Fresh, not-yet-created database file.
pub fn temp_db_path(tag: &str) -> TempDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "bytestash-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));
    TempDb { path: temp_path }
}

pub fn database_url(path: &Path) -> String {
    format!("sqlite:{}", path.display())
}

/// Creates the schema in a new database file and returns a writable pool for seeding.
pub async fn writable_store(path: &Path) -> SqlitePool {
    let opts = SqliteConnectOptions::from_str(&database_url(path))
        .expect("invalid database url")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(opts)
        .await
        .expect("failed to open writable test database");
    apply_schema(&pool).await.expect("failed to apply schema");
    pool
}

pub async fn insert_user(pool: &SqlitePool, id: i64, username: &str) {
    sqlx::query("INSERT INTO users (id, username) VALUES (?, ?)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await
        .expect("insert user");
}

pub async fn insert_snippet(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    description: Option<&str>,
    updated_at: &str,
    user_id: Option<i64>,
) {
    sqlx::query(
        "INSERT INTO snippets (id, title, description, updated_at, user_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(updated_at)
    .bind(user_id)
    .execute(pool)
    .await
    .expect("insert snippet");
}

pub async fn insert_fragment(
    pool: &SqlitePool,
    snippet_id: i64,
    language: Option<&str>,
    code: Option<&str>,
    position: Option<i64>,
) {
    sqlx::query("INSERT INTO fragments (snippet_id, language, code, position) VALUES (?, ?, ?, ?)")
        .bind(snippet_id)
        .bind(language)
        .bind(code)
        .bind(position)
        .execute(pool)
        .await
        .expect("insert fragment");
}

/// Router over a read-only pool, the way the binary wires it.
pub fn app_for(path: &Path) -> Router {
    app_with_cors(path, &CorsConfig::default())
}

pub fn app_with_cors(path: &Path, cors: &CorsConfig) -> Router {
    let pool = connect_lazy(&database_url(path), 4).expect("invalid database url");
    let state = StashState::new(SnippetStore::new(pool), Arc::from(API_KEY));
    stash_router(state, cors)
}

pub fn get(uri: &str, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-API-Key", key);
    }
    builder.body(Body::empty()).expect("failed to build request")
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&body).expect("response body was not JSON")
}
