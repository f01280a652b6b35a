use crate::error::StashError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};

/// Builds a read-only pool that opens connections on first use.
///
/// Nothing is connected here, so the server starts even when the store is
/// missing; the failure then surfaces per request (and on `/health`).
pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<SqlitePool, StashError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .busy_timeout(Duration::from_secs(5));

    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(connect_opts))
}
