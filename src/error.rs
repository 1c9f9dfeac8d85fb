//! Error types for board operations.

use thiserror::Error;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur in board operations.
///
/// Store mutations that target an unknown canvas or widget id are *not*
/// errors: ids come from a render of current store state, so a miss means a
/// stale view, and the mutation is a silent no-op. This enum only covers
/// operations that can genuinely fail.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A canvas or widget id string was not a valid UUID.
    #[error("Invalid id: {0}")]
    InvalidId(#[from] uuid::Error),

    /// Canvas serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
