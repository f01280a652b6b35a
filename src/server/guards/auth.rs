use crate::server::router::StashState;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::debug;

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

fn extract_header_token(headers: &HeaderMap) -> Option<&str> {
    headers.get(X_API_KEY).and_then(|v| v.to_str().ok())
}

/// Exact, case-sensitive, constant-time comparison of a presented key against
/// the configured one. Absent and empty keys never match.
pub fn key_matches(presented: Option<&str>, expected: &str) -> bool {
    match presented {
        Some(key) if !key.is_empty() && !expected.is_empty() => {
            key.as_bytes().ct_eq(expected.as_bytes()).into()
        }
        _ => false,
    }
}

/// Route guard: rejects the request before the handler (and any store access) runs.
#[derive(Debug, Clone, Copy)]
pub struct RequireKeyAuth;

impl FromRequestParts<StashState> for RequireKeyAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &StashState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_header_token(&parts.headers);
        if key_matches(token, state.api_key.as_ref()) {
            return Ok(RequireKeyAuth);
        }
        debug!(path = %parts.uri.path(), present = token.is_some(), "Rejected API key");
        match token {
            None => Err(AuthError::MissingKey),
            Some(_) => Err(AuthError::InvalidKey),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingKey,
    InvalidKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let reason = match self {
            AuthError::MissingKey => "Missing API key",
            AuthError::InvalidKey => "Invalid API key",
        };
        (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "forbidden", "reason": reason })),
        )
            .into_response()
    }
}
