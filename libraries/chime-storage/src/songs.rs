//! Songs vertical slice

use crate::error::{Result, StorageError};
use chime_core::types::{NewSong, Song, SongId};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Persist a new song and return the full record with its assigned id.
///
/// Display fallbacks are applied here, the way the original record is laid
/// out on disk: a missing tag title becomes the filename, a missing artist
/// becomes "Unknown Artist", and an unusable duration becomes 0.
pub async fn add(pool: &SqlitePool, song: NewSong) -> Result<Song> {
    let title = song
        .metadata
        .title
        .clone()
        .unwrap_or_else(|| song.name.clone());
    let artist = song
        .metadata
        .artist
        .clone()
        .unwrap_or_else(|| "Unknown Artist".to_string());
    let duration_seconds = Song::sanitize_duration(song.metadata.duration_seconds);

    // Timestamps persist at second precision; truncate up front so the
    // returned record matches what a later read will see.
    let now = Utc::now();
    let added_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);

    let result = sqlx::query(
        "INSERT INTO songs (name, title, artist, media_type, size_bytes, added_at, duration_seconds, payload)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&song.name)
    .bind(&title)
    .bind(&artist)
    .bind(&song.media_type)
    .bind(song.payload.len() as i64)
    .bind(added_at.timestamp())
    .bind(duration_seconds)
    .bind(song.payload.as_slice())
    .execute(pool)
    .await?;

    Ok(Song {
        id: SongId::new(result.last_insert_rowid()),
        name: song.name,
        title,
        artist,
        media_type: song.media_type,
        size_bytes: song.payload.len() as u64,
        added_at,
        duration_seconds,
    })
}

/// Get all current song records, in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, name, title, artist, media_type, size_bytes, added_at, duration_seconds
         FROM songs ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Fetch the binary payload for a song, or `None` if the id is absent
pub async fn payload(pool: &SqlitePool, id: SongId) -> Result<Option<Vec<u8>>> {
    let row = sqlx::query("SELECT payload FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get::<Vec<u8>, _>("payload")))
}

/// Delete a song. Deleting an absent id is a no-op, not an error.
pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<()> {
    sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.get("id"),
        name: row.get("name"),
        title: row.get("title"),
        artist: row.get("artist"),
        media_type: row.get("media_type"),
        size_bytes: row.get::<i64, _>("size_bytes") as u64,
        added_at: DateTime::from_timestamp(row.get::<i64, _>("added_at"), 0)
            .ok_or_else(|| StorageError::Query("invalid added_at timestamp".to_string()))?,
        duration_seconds: Song::sanitize_duration(row.get::<f64, _>("duration_seconds")),
    })
}
