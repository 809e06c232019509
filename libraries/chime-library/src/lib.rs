//! Chime Player Library
//!
//! Orchestration layer for the Chime Player media library: imports, deletes
//! with playlist cascade, playback selection, and playlist CRUD, all while
//! keeping an in-memory mirror of the store and a table of playable handles
//! consistent with what is durably committed.
//!
//! The pieces:
//! - [`LibraryController`] — drives the store, extractor, handle table, and
//!   playback queue from a single control flow
//! - [`HandleTable`] — generation-tagged arena of transient playable
//!   handles; one live handle per song per view generation, released in
//!   batches when a view generation is superseded

mod controller;
mod handles;

pub use controller::LibraryController;
pub use handles::{HandleTable, PlayableHandle, DEFAULT_HANDLE_CAPACITY};
