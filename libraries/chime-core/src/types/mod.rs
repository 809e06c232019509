//! Domain types for the Chime Player library

mod ids;
mod playlist;
mod song;

pub use ids::{PlaylistId, SongId};
pub use playlist::Playlist;
pub use song::{NewSong, Song, SongMetadata};
