/// Song domain types
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A song record as persisted by the media store.
///
/// The binary audio payload belongs to the store (it lives in the same row,
/// schema v1) and is fetched separately via `MediaStore::song_payload`;
/// carrying it on every record would make `all_songs` pull the whole library
/// into memory.
///
/// Records are immutable after creation apart from deletion.
// TODO: rename enrichment (user-edited titles) once the library view exposes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Store-assigned identifier
    pub id: SongId,

    /// Original filename at import time
    pub name: String,

    /// Display title: embedded tag title, else the filename
    pub title: String,

    /// Artist: embedded tag artist, else "Unknown Artist"
    pub artist: String,

    /// MIME type of the payload
    pub media_type: String,

    /// Payload size in bytes
    pub size_bytes: u64,

    /// When the song was imported
    pub added_at: DateTime<Utc>,

    /// Duration in seconds; always finite and non-negative, 0 when the
    /// duration could not be determined
    pub duration_seconds: f64,
}

impl Song {
    /// Get the duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_seconds)
    }

    /// Coerce a raw probed duration onto the record invariant: finite and
    /// non-negative, with anything else collapsing to 0.
    pub fn sanitize_duration(raw: f64) -> f64 {
        if raw.is_finite() && raw >= 0.0 {
            raw
        } else {
            0.0
        }
    }
}

/// Input to `MediaStore::add_song`: the raw payload plus whatever the
/// extractor recovered. The store assigns the id and applies the display
/// fallbacks (`title` ← filename, `artist` ← "Unknown Artist").
#[derive(Debug, Clone, PartialEq)]
pub struct NewSong {
    /// Original filename
    pub name: String,

    /// MIME type of the payload
    pub media_type: String,

    /// Binary audio payload, owned by the store after the call
    pub payload: Vec<u8>,

    /// Best-effort extracted metadata
    pub metadata: SongMetadata,
}

impl NewSong {
    /// Create a new song input
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        payload: Vec<u8>,
        metadata: SongMetadata,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            payload,
            metadata,
        }
    }
}

/// Best-effort metadata for one audio payload.
///
/// Every field is already degraded: absent or unparseable tags are `None`,
/// an unprobeable duration is 0. Producing this value never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongMetadata {
    /// Tag title, if one was present and non-empty
    pub title: Option<String>,

    /// Tag artist, if one was present and non-empty
    pub artist: Option<String>,

    /// Probed duration in seconds, 0 when undeterminable
    pub duration_seconds: f64,
}
