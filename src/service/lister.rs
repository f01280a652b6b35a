use crate::db::SnippetStore;
use crate::error::StashError;
use bytestash_schema::SnippetSummary;

/// All snippet summaries, most recently updated first.
pub async fn list_snippets(store: &SnippetStore) -> Result<Vec<SnippetSummary>, StashError> {
    let rows = store.list_summaries().await?;
    Ok(rows.into_iter().map(SnippetSummary::from).collect())
}
