//! Error types for catalog type generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for typegen operations
pub type Result<T> = std::result::Result<T, TypegenError>;

/// Catalog type-generation errors
///
/// Every variant is fatal for the run: there is no local recovery, no
/// partial-success reporting, and no retry. Rerunning the whole pipeline
/// is the recovery path.
#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("Invalid catalog index: {0}")]
    InvalidIndex(String),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Schema not found: {name} at {path}")]
    SchemaNotFound { name: String, path: PathBuf },

    #[error("Failed to compile schema '{name}': {message}")]
    Compilation { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
