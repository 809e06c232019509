//! Chime Player Metadata
//!
//! Best-effort metadata extraction for imported audio payloads.
//!
//! Two independent paths feed the result:
//! - embedded-tag parsing (title/artist)
//! - a duration probe with a bounded wait
//!
//! Either path may fail without affecting the other, and neither failure is
//! ever surfaced: callers always receive a fully-populated
//! [`SongMetadata`](chime_core::types::SongMetadata) with documented
//! defaults (absent tags, zero duration). This is what lets the import flow
//! skip exception handling entirely.
//!
//! # Example
//!
//! ```rust
//! use chime_metadata::MetadataExtractor;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let extractor = MetadataExtractor::new();
//!
//! // Not audio at all: both paths degrade, nothing errors.
//! let metadata = extractor.extract(b"definitely not audio").await;
//! assert!(metadata.title.is_none());
//! assert!(metadata.artist.is_none());
//! assert_eq!(metadata.duration_seconds, 0.0);
//! # }
//! ```

mod error;
mod extractor;
mod reader;

pub use error::{MetadataError, Result};
pub use extractor::{MetadataExtractor, DEFAULT_PROBE_TIMEOUT};
