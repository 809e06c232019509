//! Library orchestration: import, delete cascade, playback selection,
//! playlist CRUD

use crate::handles::{HandleTable, PlayableHandle};
use chime_core::error::Result;
use chime_core::types::{NewSong, Playlist, PlaylistId, Song, SongId};
use chime_core::{ChimeError, MediaStore};
use chime_metadata::MetadataExtractor;
use chime_playback::PlaybackQueue;
use std::path::Path;
use std::sync::Arc;

/// Name of the playlist `add_to_default_playlist` creates when the library
/// has none
const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";

/// Orchestrates the store, metadata extractor, handle table, and playback
/// queue from a single control flow.
///
/// The controller keeps an in-memory mirror of both collections. Every
/// mutating operation persists first and patches the mirror from what
/// actually committed, so after any call returns the mirror and the durable
/// store agree. The one designed exception is the delete cascade, which is a
/// sequence of independent commits: an interruption can leave later
/// playlists still referencing the deleted id, and playback resolves those
/// entries as skippable.
pub struct LibraryController<S> {
    store: S,
    extractor: MetadataExtractor,
    handles: HandleTable,
    queue: PlaybackQueue,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
}

impl<S: MediaStore> LibraryController<S> {
    /// Create a controller over a store.
    ///
    /// The in-memory view starts empty; call [`reload`](Self::reload) to
    /// populate it from the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            extractor: MetadataExtractor::new(),
            handles: HandleTable::new(),
            queue: PlaybackQueue::new(),
            songs: Vec::new(),
            playlists: Vec::new(),
        }
    }

    /// Rebuild the in-memory view from the store and remint playable
    /// handles under a fresh view generation. Handles owned by the
    /// superseded generation are released as a batch once the new view is
    /// up.
    pub async fn reload(&mut self) -> Result<()> {
        self.songs = self.store.all_songs().await?;
        self.playlists = self.store.all_playlists().await?;

        self.handles.begin_generation();
        for song in &self.songs {
            if let Some(payload) = self.store.song_payload(song.id).await? {
                self.handles.mint(song.id, Arc::new(payload))?;
            }
        }
        self.handles.release_superseded();

        tracing::debug!(
            songs = self.songs.len(),
            playlists = self.playlists.len(),
            "library reloaded"
        );
        Ok(())
    }

    /// Import one audio file: extract metadata (best-effort), persist the
    /// song, mint its playable handle, and return the stored record.
    pub async fn import_file(&mut self, path: &Path) -> Result<Song> {
        let payload = tokio::fs::read(path).await?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let media_type = media_type_for(path);

        let metadata = self.extractor.extract(&payload).await;

        let song = self
            .store
            .add_song(NewSong::new(name, media_type, payload.clone(), metadata))
            .await?;

        tracing::debug!(id = %song.id, title = %song.title, "imported song");

        self.songs.push(song.clone());
        self.handles.mint(song.id, Arc::new(payload))?;
        Ok(song)
    }

    /// Remove a song and cascade the deletion into every playlist.
    ///
    /// The cascade is composed from store primitives, one commit per
    /// playlist. Each playlist is persisted before the mirror entry is
    /// patched, so an error (or crash) mid-cascade leaves the mirror
    /// consistent with what committed, plus some playlists durably holding
    /// a stale id — a recoverable state, not a failure: queue resolution
    /// skips those entries.
    pub async fn remove_song(&mut self, id: SongId) -> Result<()> {
        self.store.delete_song(id).await?;
        self.handles.revoke(id);
        self.songs.retain(|s| s.id != id);

        for index in 0..self.playlists.len() {
            if !self.playlists[index].contains(id) {
                continue;
            }
            let mut updated = self.playlists[index].clone();
            updated.remove_song(id);
            self.store.update_playlist(&updated).await?;
            self.playlists[index] = updated;
        }

        tracing::debug!(%id, "removed song and cascaded into playlists");
        Ok(())
    }

    /// Load the queue with the whole library, positioned at `id` (or at the
    /// first entry when the id is unknown)
    pub fn play_song(&mut self, id: SongId) {
        let ids: Vec<SongId> = self.songs.iter().map(|s| s.id).collect();
        let start = ids.iter().position(|queued| *queued == id).unwrap_or(0);
        self.queue.load(ids, start);
    }

    /// Load the queue with a playlist's id sequence from the top. A no-op
    /// when the playlist is unknown or has no entries.
    pub fn play_playlist(&mut self, id: PlaylistId) {
        let Some(playlist) = self.playlists.iter().find(|p| p.id == id) else {
            tracing::debug!(%id, "play_playlist: unknown playlist");
            return;
        };
        if playlist.song_ids.is_empty() {
            return;
        }
        self.queue.load(playlist.song_ids.clone(), 0);
    }

    /// Load the queue with every song by the given artist, in library
    /// order. A no-op when nothing matches.
    pub fn play_artist(&mut self, artist: &str) {
        let ids: Vec<SongId> = self
            .songs
            .iter()
            .filter(|s| s.artist == artist)
            .map(|s| s.id)
            .collect();
        if ids.is_empty() {
            return;
        }
        self.queue.load(ids, 0);
    }

    /// Create a playlist, optionally seeded with an initial id sequence
    pub async fn create_playlist(
        &mut self,
        name: &str,
        initial_ids: Vec<SongId>,
    ) -> Result<Playlist> {
        let playlist = self.store.create_playlist(name, initial_ids).await?;
        self.playlists.push(playlist.clone());
        Ok(playlist)
    }

    /// Rename a playlist
    pub async fn rename_playlist(&mut self, id: PlaylistId, name: &str) -> Result<()> {
        let index = self.playlist_index(id)?;
        let mut updated = self.playlists[index].clone();
        updated.name = name.to_string();
        self.store.update_playlist(&updated).await?;
        self.playlists[index] = updated;
        Ok(())
    }

    /// Append a song to the end of a playlist (duplicates allowed)
    pub async fn append_song(&mut self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        let index = self.playlist_index(playlist_id)?;
        let mut updated = self.playlists[index].clone();
        updated.song_ids.push(song_id);
        self.store.update_playlist(&updated).await?;
        self.playlists[index] = updated;
        Ok(())
    }

    /// Append a song to the first playlist, creating "My Playlist" seeded
    /// with the song when the library has none
    pub async fn add_to_default_playlist(&mut self, song_id: SongId) -> Result<()> {
        if self.playlists.is_empty() {
            self.create_playlist(DEFAULT_PLAYLIST_NAME, vec![song_id])
                .await?;
            return Ok(());
        }
        let id = self.playlists[0].id;
        self.append_song(id, song_id).await
    }

    /// Delete a playlist. Idempotent, like the store primitive beneath it.
    pub async fn delete_playlist(&mut self, id: PlaylistId) -> Result<()> {
        self.store.delete_playlist(id).await?;
        self.playlists.retain(|p| p.id != id);
        Ok(())
    }

    /// Advance the queue cursor (no wraparound)
    pub fn next(&mut self) {
        self.queue.next();
    }

    /// Step the queue cursor back (no-op at the start)
    pub fn prev(&mut self) {
        self.queue.prev();
    }

    /// Song under the queue cursor; `None` when nothing is selected or the
    /// entry went stale (the song was deleted after the queue was loaded)
    pub fn current_song(&self) -> Option<&Song> {
        self.queue.current(|id| self.songs.iter().find(|s| s.id == id))
    }

    /// In-memory view of the song collection
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// In-memory view of the playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// The playback queue
    pub fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    /// The live playable handle for a song, if one is minted
    pub fn handle(&self, id: SongId) -> Option<&PlayableHandle> {
        self.handles.get(id)
    }

    fn playlist_index(&self, id: PlaylistId) -> Result<usize> {
        self.playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or(ChimeError::PlaylistNotFound(id))
    }
}

/// Derive the stored MIME type from the filename extension; filesystem
/// imports carry no ready-made content type.
fn media_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg" | "oga") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("m4a" | "mp4") => "audio/mp4",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_from_extension() {
        assert_eq!(media_type_for(Path::new("/a/song.MP3")), "audio/mpeg");
        assert_eq!(media_type_for(Path::new("song.wav")), "audio/wav");
        assert_eq!(media_type_for(Path::new("song.m4a")), "audio/mp4");
        assert_eq!(
            media_type_for(Path::new("no-extension")),
            "application/octet-stream"
        );
    }
}
