mod stash;

pub use stash::{ApiErrorBody, ApiErrorObject, StashError};
