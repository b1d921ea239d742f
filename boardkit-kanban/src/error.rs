//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Status column not found
    #[error("status not found: {id}")]
    StatusNotFound { id: String },

    /// Duplicate task ID
    #[error("duplicate task ID: {id}")]
    DuplicateTask { id: String },

    /// Duplicate status ID
    #[error("duplicate status ID: {id}")]
    DuplicateStatus { id: String },

    /// The key generator has no key inside the neighbor gap
    #[error("no order key fits between '{before}' and '{after}'")]
    NoKeyBetween { before: String, after: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::TaskNotFound { id: "abc123".into() };
        assert_eq!(err.to_string(), "task not found: abc123");

        let err = BoardError::StatusNotFound { id: "todo".into() };
        assert_eq!(err.to_string(), "status not found: todo");
    }
}
