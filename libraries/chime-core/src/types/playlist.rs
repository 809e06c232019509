/// Playlist domain type
use crate::types::{PlaylistId, SongId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered, named collection of song ids.
///
/// Duplicates are permitted and order is playback order. Entries SHOULD
/// reference songs that still exist; a deleted song may linger here during
/// the delete cascade window, and consumers resolve such ids to "no song"
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Store-assigned identifier
    pub id: PlaylistId,

    /// User-mutable display name
    pub name: String,

    /// Ordered song ids (playback order, duplicates allowed)
    pub song_ids: Vec<SongId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Whether the playlist references the given song (at any position)
    pub fn contains(&self, id: SongId) -> bool {
        self.song_ids.contains(&id)
    }

    /// Strip every occurrence of the given song id, preserving the order of
    /// the remaining entries
    pub fn remove_song(&mut self, id: SongId) {
        self.song_ids.retain(|entry| *entry != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(ids: &[i64]) -> Playlist {
        Playlist {
            id: PlaylistId::new(1),
            name: "Test".to_string(),
            song_ids: ids.iter().copied().map(SongId::new).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn remove_song_strips_duplicates() {
        let mut pl = playlist(&[1, 2, 1, 3, 1]);
        pl.remove_song(SongId::new(1));
        assert_eq!(pl.song_ids, vec![SongId::new(2), SongId::new(3)]);
    }

    #[test]
    fn remove_song_on_absent_id_is_a_no_op() {
        let mut pl = playlist(&[4, 5]);
        pl.remove_song(SongId::new(9));
        assert_eq!(pl.song_ids.len(), 2);
    }

    #[test]
    fn contains_checks_membership() {
        let pl = playlist(&[7]);
        assert!(pl.contains(SongId::new(7)));
        assert!(!pl.contains(SongId::new(8)));
    }
}
