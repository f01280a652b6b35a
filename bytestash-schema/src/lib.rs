pub mod health;
pub mod snippet;

pub use health::HealthStatus;
pub use snippet::{CodeBlock, SnippetDetail, SnippetSummary};
