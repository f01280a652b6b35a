use serde::{Deserialize, Serialize};

/// Listing entry returned by `GET /snippets/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnippetSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    /// Placeholder for fragments stored without a language tag.
    pub const UNKNOWN_LANGUAGE: &'static str = "unknown";
}

/// Full snippet as returned by `GET /snippets/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnippetDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub updated_at: String,
    pub username: String,
    pub code_blocks: Vec<CodeBlock>,
}

impl SnippetDetail {
    /// Placeholder for snippets without an owning user.
    pub const ANONYMOUS: &'static str = "anonymous";
}
