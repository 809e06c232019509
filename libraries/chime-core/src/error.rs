/// Core error types for Chime Player
use crate::types::PlaylistId;
use thiserror::Error;

/// Result type alias using `ChimeError`
pub type Result<T> = std::result::Result<T, ChimeError>;

/// Core error type for Chime Player
///
/// Metadata extraction deliberately has no variant here: tag and duration
/// failures degrade to default field values inside `chime-metadata` and are
/// never surfaced to callers.
#[derive(Error, Debug)]
pub enum ChimeError {
    /// The durable store could not complete a commit (quota, unavailable
    /// backend, serialization failure)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// The playable-handle table hit its process-wide ceiling and no
    /// superseded handle was left to evict
    #[error("Playable handle table exhausted ({capacity} live handles)")]
    HandleExhausted {
        /// Configured ceiling of the handle table
        capacity: usize,
    },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChimeError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
