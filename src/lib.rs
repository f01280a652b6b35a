pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod service;
pub mod utils;

pub use error::StashError;
