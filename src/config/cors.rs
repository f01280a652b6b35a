use serde::{Deserialize, Serialize};

/// Browser origins allowed to call the API.
///
/// An empty list disables the CORS layer entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    /// TOML: `cors.allow_origins`. Example: `["https://bytestash.example.net"]`.
    #[serde(default)]
    pub allow_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.allow_origins.is_empty()
    }
}
