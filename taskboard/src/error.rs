//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Board already has columns and cannot be seeded again
    #[error("board already initialized with {columns} columns")]
    AlreadyInitialized { columns: usize },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// The operation would leave the board unchanged
    #[error("no change: {reason}")]
    NoOp { reason: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration could not be parsed
    #[error("config error: {message}")]
    Config { message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a no-op error
    pub fn no_op(reason: impl Into<String>) -> Self {
        Self::NoOp {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Misses and unchanged results are silent no-ops at the board surface.
    pub fn is_no_op(&self) -> bool {
        matches!(
            self,
            Self::TaskNotFound { .. } | Self::ColumnNotFound { .. } | Self::NoOp { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::TaskNotFound {
            id: "abc123".into(),
        };
        assert_eq!(err.to_string(), "task not found: abc123");
    }

    #[test]
    fn test_no_op_classification() {
        assert!(KanbanError::no_op("same id").is_no_op());
        assert!(KanbanError::ColumnNotFound { id: "x".into() }.is_no_op());
        assert!(!KanbanError::config("bad yaml").is_no_op());
        assert!(!KanbanError::AlreadyInitialized { columns: 2 }.is_no_op());
    }
}
