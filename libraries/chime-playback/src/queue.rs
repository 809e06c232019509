//! Ordered id sequence plus current-position cursor
//!
//! Structure:
//! ```text
//! ids:     [ 12, 7, 7, 31, 4 ]
//!                    ^
//! current: ──────────┘  (always < len while non-empty)
//! ```

use chime_core::types::{Song, SongId};

/// Sequential playback queue
///
/// Invariant: `current < ids.len()` whenever the queue is non-empty. An
/// empty queue has no current song; callers treat that as "nothing
/// selected", never as an error.
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    /// Snapshot of song ids in playback order (duplicates allowed)
    ids: Vec<SongId>,

    /// Cursor into `ids`
    current: usize,
}

impl PlaybackQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale.
    ///
    /// An empty `ids` empties the queue regardless of `start_index`; an
    /// out-of-range start clamps to the last entry.
    pub fn load(&mut self, ids: Vec<SongId>, start_index: usize) {
        self.current = if ids.is_empty() {
            0
        } else {
            start_index.min(ids.len() - 1)
        };
        self.ids = ids;
    }

    /// Advance the cursor by one; a no-op at the last entry (no wraparound)
    pub fn next(&mut self) {
        if self.current + 1 < self.ids.len() {
            self.current += 1;
        }
    }

    /// Step the cursor back by one; a no-op at the first entry
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Id under the cursor, or `None` when the queue is empty
    pub fn current_id(&self) -> Option<SongId> {
        self.ids.get(self.current).copied()
    }

    /// Resolve the current entry through the supplied id→record lookup.
    ///
    /// `None` means nothing is selected: either the queue is empty, or the
    /// id no longer resolves because the song was deleted out from under
    /// the queue. Resolution failure is how stale entries get skipped — it
    /// is not an error.
    pub fn current<'a, F>(&self, resolver: F) -> Option<&'a Song>
    where
        F: FnOnce(SongId) -> Option<&'a Song>,
    {
        self.current_id().and_then(resolver)
    }

    /// All queued ids in order
    pub fn ids(&self) -> &[SongId] {
        &self.ids
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ids(raw: &[i64]) -> Vec<SongId> {
        raw.iter().copied().map(SongId::new).collect()
    }

    fn test_song(id: i64) -> Song {
        Song {
            id: SongId::new(id),
            name: format!("song{id}.mp3"),
            title: format!("Song {id}"),
            artist: "Test Artist".to_string(),
            media_type: "audio/mpeg".to_string(),
            size_bytes: 128,
            added_at: Utc::now(),
            duration_seconds: 180.0,
        }
    }

    #[test]
    fn empty_load_has_no_current_regardless_of_start() {
        for start in [0, 1, 7, usize::MAX] {
            let mut queue = PlaybackQueue::new();
            queue.load(Vec::new(), start);
            assert!(queue.is_empty());
            assert_eq!(queue.current_id(), None);
        }
    }

    #[test]
    fn next_walks_forward_and_stops_at_the_end() {
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[1, 2, 3]), 0);

        queue.next();
        assert_eq!(queue.current_id(), Some(SongId::new(2)));
        queue.next();
        assert_eq!(queue.current_id(), Some(SongId::new(3)));

        // No wraparound
        queue.next();
        assert_eq!(queue.current_id(), Some(SongId::new(3)));
    }

    #[test]
    fn prev_at_the_start_is_a_no_op() {
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[1, 2]), 0);

        queue.prev();
        assert_eq!(queue.current_id(), Some(SongId::new(1)));
    }

    #[test]
    fn out_of_range_start_clamps_to_last_entry() {
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[1, 2, 3]), 99);
        assert_eq!(queue.current_id(), Some(SongId::new(3)));
    }

    #[test]
    fn load_replaces_previous_state_unconditionally() {
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[1, 2, 3]), 2);
        queue.load(ids(&[9]), 0);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current_id(), Some(SongId::new(9)));
    }

    #[test]
    fn current_resolves_through_the_lookup() {
        let songs = vec![test_song(1), test_song(2)];
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[2, 1]), 0);

        let current = queue.current(|id| songs.iter().find(|s| s.id == id));
        assert_eq!(current.map(|s| s.id), Some(SongId::new(2)));
    }

    #[test]
    fn stale_id_resolves_to_none_without_breaking_navigation() {
        // Song 2 was deleted after the queue snapshot was taken
        let songs = vec![test_song(1), test_song(3)];
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[1, 2, 3]), 1);

        assert!(queue.current(|id| songs.iter().find(|s| s.id == id)).is_none());

        // Navigation keeps working past the stale entry
        queue.next();
        let current = queue.current(|id| songs.iter().find(|s| s.id == id));
        assert_eq!(current.map(|s| s.id), Some(SongId::new(3)));
    }

    #[test]
    fn duplicate_ids_occupy_distinct_positions() {
        let mut queue = PlaybackQueue::new();
        queue.load(ids(&[5, 5, 5]), 0);

        queue.next();
        assert_eq!(queue.position(), 1);
        assert_eq!(queue.current_id(), Some(SongId::new(5)));
    }
}
