//! Error types for the reorder layer

use boardkit_kanban::BoardError;
use thiserror::Error;

/// Result type for reorder operations
pub type Result<T> = std::result::Result<T, ReorderError>;

/// Errors that can occur while resolving or committing a reorder
#[derive(Debug, Error)]
pub enum ReorderError {
    /// Resolved neighbor keys are equal or inverted
    #[error("degenerate drop bounds: before key '{before}' is not below after key '{after}'")]
    DegenerateBounds { before: String, after: String },

    /// A resolved neighbor is unknown to the key lookup
    #[error("unknown neighbor task: {id}")]
    UnknownNeighbor { id: String },

    /// A drag was started while another one is active
    #[error("drag already in progress for task {id}")]
    DragInProgress { id: String },

    /// The board rejected the committed move
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

impl ReorderError {
    /// Degenerate resolutions are suppressed (logged, drop becomes a
    /// no-op) rather than surfaced to the caller.
    pub fn is_suppressible(&self) -> bool {
        matches!(
            self,
            Self::DegenerateBounds { .. } | Self::UnknownNeighbor { .. }
        )
    }
}
