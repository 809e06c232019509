//! Generation-tagged playable-handle table
//!
//! Payloads are binary and potentially large, and the runtime enforces a
//! ceiling on how many can be held open at once, so handle lifetime is
//! tracked explicitly instead of relying on incidental cleanup: each view
//! generation owns its handles and releases them as a batch when the view
//! is superseded.

use chime_core::{ChimeError, Result, SongId};
use std::collections::HashMap;
use std::sync::Arc;

/// Default ceiling on live handles
pub const DEFAULT_HANDLE_CAPACITY: usize = 512;

/// Transient, process-local reference to a song's payload.
///
/// Cloning shares the payload rather than copying it. Never persisted; a
/// handle is only meaningful to the view generation that minted it.
#[derive(Debug, Clone)]
pub struct PlayableHandle {
    song_id: SongId,
    generation: u64,
    payload: Arc<Vec<u8>>,
}

impl PlayableHandle {
    /// The song this handle plays
    pub fn song_id(&self) -> SongId {
        self.song_id
    }

    /// The view generation that owns this handle
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The playable bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Table of live playable handles, at most one per song per view generation.
#[derive(Debug)]
pub struct HandleTable {
    live: HashMap<SongId, PlayableHandle>,
    generation: u64,
    capacity: usize,
}

impl HandleTable {
    /// Create a table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HANDLE_CAPACITY)
    }

    /// Create a table with a custom capacity ceiling
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: HashMap::new(),
            generation: 0,
            capacity,
        }
    }

    /// Mint a handle for `song_id`.
    ///
    /// Policy: minting for a song that already holds a live handle in the
    /// current generation returns that handle — there is never a second
    /// independently-live handle for the same song. A leftover handle from
    /// a superseded generation is replaced in place.
    ///
    /// At the capacity ceiling, superseded-generation handles are evicted
    /// first; if every live handle belongs to the current generation the
    /// mint fails with [`ChimeError::HandleExhausted`].
    pub fn mint(&mut self, song_id: SongId, payload: Arc<Vec<u8>>) -> Result<PlayableHandle> {
        if let Some(existing) = self.live.get(&song_id) {
            if existing.generation == self.generation {
                return Ok(existing.clone());
            }
        }

        if self.live.len() >= self.capacity && !self.live.contains_key(&song_id) {
            self.release_superseded();
            if self.live.len() >= self.capacity {
                return Err(ChimeError::HandleExhausted {
                    capacity: self.capacity,
                });
            }
        }

        let handle = PlayableHandle {
            song_id,
            generation: self.generation,
            payload,
        };
        self.live.insert(song_id, handle.clone());
        Ok(handle)
    }

    /// Revoke the handle for `song_id`.
    ///
    /// Revoking twice, or revoking a song that never held a handle, is a
    /// no-op.
    pub fn revoke(&mut self, song_id: SongId) {
        self.live.remove(&song_id);
    }

    /// Start a new view generation.
    ///
    /// Handles minted so far stay live (the superseded view may still be
    /// playing) until [`release_superseded`](Self::release_superseded) or a
    /// capacity squeeze claims them.
    pub fn begin_generation(&mut self) {
        self.generation += 1;
    }

    /// Batch-release every handle owned by a superseded view generation
    pub fn release_superseded(&mut self) {
        let current = self.generation;
        self.live.retain(|_, handle| handle.generation == current);
    }

    /// The live handle for a song, if any
    pub fn get(&self, song_id: SongId) -> Option<&PlayableHandle> {
        self.live.get(&song_id)
    }

    /// Number of live handles across all generations
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Current view generation
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for HandleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(byte: u8) -> Arc<Vec<u8>> {
        Arc::new(vec![byte; 16])
    }

    #[test]
    fn double_mint_returns_the_existing_handle() {
        let mut table = HandleTable::new();
        let first = table.mint(SongId::new(1), payload(1)).unwrap();
        let second = table.mint(SongId::new(1), payload(2)).unwrap();

        // The second mint did not take: the original payload is still the
        // live one, and there is still exactly one handle
        assert_eq!(second.payload(), first.payload());
        assert_eq!(second.payload(), &[1u8; 16][..]);
        assert_eq!(table.live_count(), 1);
        assert_eq!(first.generation(), second.generation());
    }

    #[test]
    fn revoke_is_idempotent() {
        let mut table = HandleTable::new();
        table.mint(SongId::new(1), payload(1)).unwrap();

        table.revoke(SongId::new(1));
        assert!(table.get(SongId::new(1)).is_none());

        // Double revoke and revoking an unknown id are no-ops
        table.revoke(SongId::new(1));
        table.revoke(SongId::new(99));
        assert_eq!(table.live_count(), 0);
    }

    #[test]
    fn superseded_generation_is_released_as_a_batch() {
        let mut table = HandleTable::new();
        table.mint(SongId::new(1), payload(1)).unwrap();
        table.mint(SongId::new(2), payload(2)).unwrap();

        table.begin_generation();
        table.mint(SongId::new(3), payload(3)).unwrap();
        assert_eq!(table.live_count(), 3);

        table.release_superseded();
        assert_eq!(table.live_count(), 1);
        assert!(table.get(SongId::new(3)).is_some());
        assert!(table.get(SongId::new(1)).is_none());
    }

    #[test]
    fn capacity_squeeze_evicts_superseded_handles_first() {
        let mut table = HandleTable::with_capacity(2);
        table.mint(SongId::new(1), payload(1)).unwrap();
        table.mint(SongId::new(2), payload(2)).unwrap();

        // New view: the old handles are evictable, so minting succeeds
        table.begin_generation();
        let handle = table.mint(SongId::new(3), payload(3)).unwrap();
        assert_eq!(handle.generation(), 1);
        assert_eq!(table.live_count(), 1);
    }

    #[test]
    fn exhaustion_within_one_generation_is_an_error() {
        let mut table = HandleTable::with_capacity(1);
        table.mint(SongId::new(1), payload(1)).unwrap();

        let err = table.mint(SongId::new(2), payload(2)).unwrap_err();
        assert!(matches!(
            err,
            ChimeError::HandleExhausted { capacity: 1 }
        ));

        // Re-minting the song that holds the slot still works
        assert!(table.mint(SongId::new(1), payload(1)).is_ok());
    }

    #[test]
    fn stale_handle_is_replaced_in_place_on_remint() {
        let mut table = HandleTable::new();
        table.mint(SongId::new(1), payload(1)).unwrap();

        table.begin_generation();
        let reminted = table.mint(SongId::new(1), payload(9)).unwrap();

        assert_eq!(reminted.generation(), 1);
        assert_eq!(table.live_count(), 1);
        assert_eq!(reminted.payload(), &[9u8; 16][..]);
    }
}
