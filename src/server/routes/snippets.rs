use crate::error::StashError;
use crate::server::router::StashState;
use crate::service;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use bytestash_schema::{SnippetDetail, SnippetSummary};
use tracing::debug;

/// Snippet routes; the caller layers the key guard on top.
pub fn router() -> Router<StashState> {
    Router::new()
        .route("/snippets", get(list_snippets_handler))
        .route("/snippets/", get(list_snippets_handler))
        .route("/snippets/{id}", get(snippet_detail_handler))
}

pub(super) async fn list_snippets_handler(
    State(state): State<StashState>,
) -> Result<Json<Vec<SnippetSummary>>, StashError> {
    let snippets = service::list_snippets(&state.store).await?;
    Ok(Json(snippets))
}

pub(super) async fn snippet_detail_handler(
    State(state): State<StashState>,
    Path(raw_id): Path<String>,
) -> Result<Json<SnippetDetail>, StashError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| StashError::InvalidSnippetId(raw_id.clone()))?;

    let detail = service::snippet_detail(&state.store, id).await?;
    debug!(id, code_blocks = detail.code_blocks.len(), "Assembled snippet");
    Ok(Json(detail))
}
