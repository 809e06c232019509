//! Integration tests for the playlists vertical slice
//!
//! Covers:
//! - Create/read roundtrip with seeded ids
//! - Whole-record replace semantics (last-writer-wins)
//! - Duplicate entries in the id sequence
//! - Idempotent deletion


use chime_core::types::{PlaylistId, SongId};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let seeded = vec![SongId::new(3), SongId::new(1)];
    let playlist = chime_storage::playlists::create(pool, "Road Trip", seeded.clone())
        .await
        .expect("Failed to create playlist");

    assert_eq!(playlist.name, "Road Trip");
    assert_eq!(playlist.song_ids, seeded);

    let all = chime_storage::playlists::get_all(pool).await.unwrap();
    assert_eq!(all, vec![playlist]);
}

#[tokio::test]
async fn test_append_roundtrip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = chime_storage::songs::add(pool, bare_song("one.mp3")).await.unwrap();

    let mut playlist = chime_storage::playlists::create(pool, "X", Vec::new())
        .await
        .unwrap();

    playlist.song_ids.push(song.id);
    chime_storage::playlists::update(pool, &playlist).await.unwrap();

    let reloaded = chime_storage::playlists::get_all(pool).await.unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].name, "X");
    assert_eq!(reloaded[0].song_ids, vec![song.id]);
}

#[tokio::test]
async fn test_update_is_a_whole_record_replace() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = chime_storage::playlists::create(
        pool,
        "Before",
        vec![SongId::new(1), SongId::new(2)],
    )
    .await
    .unwrap();

    // Two divergent writers; the second one wins outright.
    let mut first = playlist.clone();
    first.name = "First Writer".to_string();
    first.song_ids = vec![SongId::new(1)];

    let mut second = playlist.clone();
    second.name = "Second Writer".to_string();
    second.song_ids = vec![SongId::new(9), SongId::new(9)];

    chime_storage::playlists::update(pool, &first).await.unwrap();
    chime_storage::playlists::update(pool, &second).await.unwrap();

    let reloaded = chime_storage::playlists::get_all(pool).await.unwrap();
    assert_eq!(reloaded[0].name, "Second Writer");
    assert_eq!(reloaded[0].song_ids, vec![SongId::new(9), SongId::new(9)]);
}

#[tokio::test]
async fn test_duplicate_entries_are_preserved_in_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let ids = vec![
        SongId::new(5),
        SongId::new(2),
        SongId::new(5),
        SongId::new(5),
    ];
    chime_storage::playlists::create(pool, "Loops", ids.clone())
        .await
        .unwrap();

    let reloaded = chime_storage::playlists::get_all(pool).await.unwrap();
    assert_eq!(reloaded[0].song_ids, ids);
}

#[tokio::test]
async fn test_delete_playlist_is_idempotent() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = chime_storage::playlists::create(pool, "Temp", Vec::new())
        .await
        .unwrap();

    chime_storage::playlists::delete(pool, playlist.id).await.unwrap();
    assert!(chime_storage::playlists::get_all(pool).await.unwrap().is_empty());

    chime_storage::playlists::delete(pool, playlist.id)
        .await
        .expect("double delete must be a no-op");

    // Absent ids are equally fine
    chime_storage::playlists::delete(pool, PlaylistId::new(404))
        .await
        .expect("deleting an unknown id must be a no-op");
}
