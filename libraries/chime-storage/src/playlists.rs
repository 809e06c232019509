//! Playlists vertical slice

use crate::error::{Result, StorageError};
use chime_core::types::{Playlist, PlaylistId, SongId};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Create a playlist, optionally seeded with an initial id sequence
pub async fn create(pool: &SqlitePool, name: &str, initial_ids: Vec<SongId>) -> Result<Playlist> {
    let now = Utc::now();
    let created_at = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
    let song_ids_json = serde_json::to_string(&initial_ids)?;

    let result = sqlx::query("INSERT INTO playlists (name, song_ids, created_at) VALUES (?, ?, ?)")
        .bind(name)
        .bind(&song_ids_json)
        .bind(created_at.timestamp())
        .execute(pool)
        .await?;

    Ok(Playlist {
        id: PlaylistId::new(result.last_insert_rowid()),
        name: name.to_string(),
        song_ids: initial_ids,
        created_at,
    })
}

/// Get all current playlists, in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query("SELECT id, name, song_ids, created_at FROM playlists ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(playlist_from_row).collect()
}

/// Whole-record replace keyed by id.
///
/// Last-writer-wins: no version check, and replacing an id that was deleted
/// concurrently re-creates the row (the keyed-store `put` semantics the rest
/// of the system is written against).
pub async fn update(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    let song_ids_json = serde_json::to_string(&playlist.song_ids)?;

    sqlx::query(
        "INSERT OR REPLACE INTO playlists (id, name, song_ids, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(playlist.id)
    .bind(&playlist.name)
    .bind(&song_ids_json)
    .bind(playlist.created_at.timestamp())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a playlist. Deleting an absent id is a no-op, not an error.
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    let song_ids: Vec<SongId> = serde_json::from_str(&row.get::<String, _>("song_ids"))?;

    Ok(Playlist {
        id: row.get("id"),
        name: row.get("name"),
        song_ids,
        created_at: DateTime::from_timestamp(row.get::<i64, _>("created_at"), 0)
            .ok_or_else(|| StorageError::Query("invalid created_at timestamp".to_string()))?,
    })
}
