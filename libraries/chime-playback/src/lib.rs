//! Chime Player - Playback Queue
//!
//! Session-local sequential playback state for Chime Player.
//!
//! A [`PlaybackQueue`] is a snapshot of song ids taken at selection time
//! (play one song, play the whole library, play a playlist) plus a cursor.
//! It deliberately does not auto-repair when the underlying library changes:
//! a song deleted out from under an active queue simply stops resolving, so
//! an in-progress listening session is never silently reordered.
//!
//! # Example
//!
//! ```rust
//! use chime_core::SongId;
//! use chime_playback::PlaybackQueue;
//!
//! let mut queue = PlaybackQueue::new();
//! queue.load(vec![SongId::new(1), SongId::new(2), SongId::new(3)], 0);
//!
//! queue.next();
//! assert_eq!(queue.current_id(), Some(SongId::new(2)));
//!
//! // No wraparound: advancing past the end stays put.
//! queue.next();
//! queue.next();
//! assert_eq!(queue.current_id(), Some(SongId::new(3)));
//! ```

mod queue;

pub use queue::PlaybackQueue;
