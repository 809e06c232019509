//! Chime Player Storage
//!
//! `SQLite` persistence layer for the Chime Player media library.
//!
//! This crate provides durable keyed storage for the two entity collections
//! (songs and playlists) behind the `chime-core` `MediaStore` trait.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: songs and playlists each own their queries
//! - **Whole-Record Playlists**: a playlist row carries its ordered id
//!   sequence as JSON; updates are last-writer-wins replaces
//! - **Blocking Commits**: every operation awaits its commit before
//!   returning, so callers can update dependent state safely
//!
//! # Example
//!
//! ```rust,no_run
//! use chime_storage::SqliteMediaStore;
//! use chime_core::MediaStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (and migrate) the database
//! let store = SqliteMediaStore::open("sqlite://chime.db").await?;
//!
//! // Read the library
//! let songs = store.all_songs().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod playlists;
pub mod songs;

pub use error::StorageError;
pub use store::SqliteMediaStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup to bring the schema up to date (schema v1: the
/// `songs` and `playlists` object stores).
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://chime.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}
