//! CLI support for colexpr
//!
//! Provides programmatic access to the colexpr CLI so editors and scripts can
//! reuse it without spawning the binary.

mod docs;
mod tokenize;

pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use tokenize::{execute_tokenize, OutputFormat, TokenizeOptions};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Pass an expression or pipe one to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'colexpr docs' to see available categories.")]
    UnknownCategory(String),
}
