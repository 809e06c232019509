/// Metadata-specific errors
///
/// Internal to the extraction pipeline: `MetadataExtractor::extract` catches
/// every one of these and degrades to default field values instead of
/// propagating.
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// I/O error while probing the payload
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}
