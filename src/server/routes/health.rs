use crate::error::StashError;
use crate::server::router::StashState;
use axum::{Json, Router, extract::State, routing::get};
use bytestash_schema::HealthStatus;

pub fn router() -> Router<StashState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/health", get(liveness_handler))
}

/// GET /health
///
/// Probes the store with `SELECT 1`; 503 when it cannot be reached.
pub(super) async fn health_handler(
    State(state): State<StashState>,
) -> Result<Json<HealthStatus>, StashError> {
    state.store.ping().await?;
    Ok(Json(HealthStatus::connected()))
}

/// GET /api/health
pub(super) async fn liveness_handler() -> Json<HealthStatus> {
    Json(HealthStatus::alive())
}
