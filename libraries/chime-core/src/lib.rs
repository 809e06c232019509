//! Chime Player Core
//!
//! Domain types, the storage trait seam, and error handling for the Chime
//! Player media library.
//!
//! The core crate defines:
//! - **Domain Types**: [`Song`], [`Playlist`], [`SongMetadata`] and their ids
//! - **Storage Seam**: the [`MediaStore`] trait implemented by `chime-storage`
//! - **Error Handling**: unified [`ChimeError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use chime_core::types::{NewSong, SongMetadata};
//!
//! // Describe a freshly imported file; the store assigns the id.
//! let song = NewSong::new(
//!     "sunrise.mp3",
//!     "audio/mpeg",
//!     vec![0u8; 2048],
//!     SongMetadata {
//!         title: Some("Sunrise".to_string()),
//!         artist: None,
//!         duration_seconds: 184.0,
//!     },
//! );
//! assert_eq!(song.name, "sunrise.mp3");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ChimeError, Result};
pub use traits::MediaStore;
pub use types::{NewSong, Playlist, PlaylistId, Song, SongId, SongMetadata};
