//! Inspector tool errors

use thiserror::Error;

/// Inspector result type
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors the inspector can hit
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
