//! Shapes store rows into API responses.

pub mod assembler;
pub mod lister;

pub use assembler::{assemble_detail, snippet_detail};
pub use lister::list_snippets;
