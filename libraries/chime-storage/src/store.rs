//! `MediaStore` implementation delegating to the vertical slices

use crate::{playlists, songs};
use async_trait::async_trait;
use chime_core::error::Result;
use chime_core::types::{NewSong, Playlist, PlaylistId, Song, SongId};
use chime_core::MediaStore;
use sqlx::SqlitePool;

/// Media store backed by `SQLite`
pub struct SqliteMediaStore {
    pool: SqlitePool,
}

impl SqliteMediaStore {
    /// Wrap an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) a store at the given URL and run migrations
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl MediaStore for SqliteMediaStore {
    async fn add_song(&self, song: NewSong) -> Result<Song> {
        Ok(songs::add(&self.pool, song).await?)
    }

    async fn all_songs(&self) -> Result<Vec<Song>> {
        Ok(songs::get_all(&self.pool).await?)
    }

    async fn song_payload(&self, id: SongId) -> Result<Option<Vec<u8>>> {
        Ok(songs::payload(&self.pool, id).await?)
    }

    async fn delete_song(&self, id: SongId) -> Result<()> {
        Ok(songs::delete(&self.pool, id).await?)
    }

    async fn create_playlist(&self, name: &str, initial_ids: Vec<SongId>) -> Result<Playlist> {
        Ok(playlists::create(&self.pool, name, initial_ids).await?)
    }

    async fn all_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(playlists::get_all(&self.pool).await?)
    }

    async fn update_playlist(&self, playlist: &Playlist) -> Result<()> {
        Ok(playlists::update(&self.pool, playlist).await?)
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        Ok(playlists::delete(&self.pool, id).await?)
    }
}
