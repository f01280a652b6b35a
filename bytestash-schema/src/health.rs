use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    /// Store reachability; omitted by the liveness probe, which never touches the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl HealthStatus {
    pub const OK: &'static str = "ok";
    pub const CONNECTED: &'static str = "connected";

    pub fn alive() -> Self {
        Self {
            status: Self::OK.to_string(),
            database: None,
        }
    }

    pub fn connected() -> Self {
        Self {
            status: Self::OK.to_string(),
            database: Some(Self::CONNECTED.to_string()),
        }
    }
}
