//! Database module: read-only access to the snippet store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring query rows
//! - `schema.rs`: SQL DDL of the tables this service reads
//! - `pool.rs`: lazily-connecting read-only SQLite pool
//! - `store.rs`: the queries

pub mod models;
pub mod pool;
pub mod schema;
pub mod store;

pub use models::{DbSnippetDetailRow, DbSnippetSummary};
pub use pool::connect_lazy;
pub use schema::{SQLITE_INIT, apply_schema};
pub use store::SnippetStore;
