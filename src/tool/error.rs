//! Error types for the tool module.

use thiserror::Error;

/// Errors raised while wrapping or calling a tool.
///
/// There is no retry policy anywhere in this crate: every failure is fatal
/// to the operation it occurs in and is surfaced directly to the caller.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The return type claims the schema capability but generating or
    /// shaping the schema failed. Surfaced at wrap time.
    #[error("Schema extraction failed: {0}")]
    SchemaExtraction(String),

    /// The underlying data model rejected its field values (e.g. a
    /// percentage outside [0, 100]). Surfaced at call time.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The call arguments could not be deserialized into the tool's input
    /// type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool name is not identifier-shaped.
    #[error("Invalid tool name: {0}")]
    InvalidName(String),

    /// JSON serialization error on the result path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The wrapped function itself failed.
    #[error("Tool execution failed: {0}")]
    Execution(String),
}
