use crate::db::{DbSnippetDetailRow, SnippetStore};
use crate::error::StashError;
use bytestash_schema::{CodeBlock, SnippetDetail};
use tracing::debug;

pub async fn snippet_detail(store: &SnippetStore, id: i64) -> Result<SnippetDetail, StashError> {
    let rows = store.detail_rows(id).await?;
    assemble_detail(rows).ok_or_else(|| {
        debug!(id, "Snippet not found");
        StashError::SnippetNotFound(id)
    })
}

/// Folds the flat join rows of one snippet into its nested detail.
///
/// Returns `None` when there are no rows at all (unknown snippet). A snippet
/// without fragments still yields one row with a null fragment, which becomes
/// an empty `code_blocks`.
pub fn assemble_detail(rows: Vec<DbSnippetDetailRow>) -> Option<SnippetDetail> {
    let mut rows = rows.into_iter();
    let DbSnippetDetailRow {
        id,
        title,
        description,
        updated_at,
        username,
        code,
        language,
    } = rows.next()?;

    let code_blocks = std::iter::once(code_block(language, code))
        .chain(rows.map(|row| code_block(row.language, row.code)))
        .flatten()
        .collect();

    Some(SnippetDetail {
        id,
        title,
        description: description.unwrap_or_default(),
        updated_at,
        username: username.unwrap_or_else(|| SnippetDetail::ANONYMOUS.to_string()),
        code_blocks,
    })
}

/// Rows without code (null or empty) carry no fragment.
fn code_block(language: Option<String>, code: Option<String>) -> Option<CodeBlock> {
    let code = code.filter(|c| !c.is_empty())?;
    Some(CodeBlock {
        language: language.unwrap_or_else(|| CodeBlock::UNKNOWN_LANGUAGE.to_string()),
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        username: Option<&str>,
        language: Option<&str>,
        code: Option<&str>,
    ) -> DbSnippetDetailRow {
        DbSnippetDetailRow {
            id: 42,
            title: "Foo".to_string(),
            description: None,
            updated_at: "2024-05-01 10:00:00".to_string(),
            username: username.map(str::to_string),
            code: code.map(str::to_string),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn no_rows_means_not_found() {
        assert_eq!(assemble_detail(Vec::new()), None);
    }

    #[test]
    fn folds_rows_with_placeholders() {
        let detail = assemble_detail(vec![
            row(None, Some("go"), Some("package main")),
            row(None, None, None),
        ])
        .unwrap();

        assert_eq!(
            detail,
            SnippetDetail {
                id: 42,
                title: "Foo".to_string(),
                description: String::new(),
                updated_at: "2024-05-01 10:00:00".to_string(),
                username: "anonymous".to_string(),
                code_blocks: vec![CodeBlock {
                    language: "go".to_string(),
                    code: "package main".to_string(),
                }],
            }
        );
    }

    #[test]
    fn snippet_without_fragments_has_empty_code_blocks() {
        let detail = assemble_detail(vec![row(Some("alice"), None, None)]).unwrap();
        assert_eq!(detail.username, "alice");
        assert!(detail.code_blocks.is_empty());
    }

    #[test]
    fn empty_code_is_dropped_and_missing_language_is_unknown() {
        let detail = assemble_detail(vec![
            row(Some("bob"), Some("rust"), Some("")),
            row(Some("bob"), None, Some("echo hi")),
        ])
        .unwrap();

        assert_eq!(
            detail.code_blocks,
            vec![CodeBlock {
                language: "unknown".to_string(),
                code: "echo hi".to_string(),
            }]
        );
    }

    #[test]
    fn keeps_row_order() {
        let detail = assemble_detail(vec![
            row(None, Some("a"), Some("first")),
            row(None, Some("b"), Some("second")),
            row(None, Some("c"), Some("third")),
        ])
        .unwrap();

        let codes: Vec<_> = detail.code_blocks.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, ["first", "second", "third"]);
    }
}
