/// Storage trait seam for Chime Player
use crate::error::Result;
use crate::types::{NewSong, Playlist, PlaylistId, Song, SongId};
use async_trait::async_trait;

/// Durable keyed storage for the two entity collections (songs, playlists).
///
/// Implementers persist records and assign ids; referential integrity
/// between the collections is NOT enforced here — the delete cascade is a
/// controller-level workflow composed from these primitives, and a playlist
/// is allowed to transiently reference a deleted song until that cascade
/// completes.
///
/// All operations suspend the caller until the underlying commit finishes.
/// Storage failures (quota, unavailable backend, serialization) surface as
/// `ChimeError::Storage`; they are never swallowed at this layer.
#[async_trait]
pub trait MediaStore: Send + Sync {
    // Song operations

    /// Persist a new song, blocking until durably committed.
    ///
    /// Assigns the id and applies display fallbacks (tag title ← filename,
    /// tag artist ← "Unknown Artist"), returning the full record.
    async fn add_song(&self, song: NewSong) -> Result<Song>;

    /// Get all current song records, in insertion order
    async fn all_songs(&self) -> Result<Vec<Song>>;

    /// Fetch the binary payload for a song, or `None` if the id is absent
    async fn song_payload(&self, id: SongId) -> Result<Option<Vec<u8>>>;

    /// Delete a song. Idempotent: an already-absent id is not an error.
    async fn delete_song(&self, id: SongId) -> Result<()>;

    // Playlist operations

    /// Create a playlist, optionally seeded with an initial id sequence
    async fn create_playlist(&self, name: &str, initial_ids: Vec<SongId>) -> Result<Playlist>;

    /// Get all current playlists, in insertion order
    async fn all_playlists(&self) -> Result<Vec<Playlist>>;

    /// Whole-record replace keyed by id. Last-writer-wins: there is no
    /// optimistic-concurrency check, and racing updates simply overwrite
    /// each other.
    async fn update_playlist(&self, playlist: &Playlist) -> Result<()>;

    /// Delete a playlist. Idempotent: an already-absent id is not an error.
    async fn delete_playlist(&self, id: PlaylistId) -> Result<()>;
}
