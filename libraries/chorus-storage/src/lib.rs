//! Chorus Storage
//!
//! `SQLite` persistence layer for the Chorus media-library server.
//!
//! This crate maps the domain records of `chorus-core` onto relational
//! rows and back. The mapping itself is explicit rather than reflective:
//! each persisted record registers its fields once (see [`sql`]), and
//! every repository write routes through that registration.
//!
//! # Architecture
//!
//! - **Vertical slicing**: each feature owns its own queries and logic
//! - **Pure mapping core**: `sql` and `metadata` are synchronous
//!   transformations with no I/O; the slices own execution
//! - **Pass-through errors**: database failures surface unmodified, with
//!   no retry policy at this layer
//!
//! # Example
//!
//! ```rust,no_run
//! use chorus_storage::{create_pool, run_migrations, SqliteLibrary};
//! use chorus_core::storage::PlaylistRepository;
//! use chorus_core::types::Playlist;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://chorus.db").await?;
//! run_migrations(&pool).await?;
//!
//! let library = SqliteLibrary::new(pool);
//!
//! let mut playlist = Playlist::new("Morning Mix");
//! library.put(&mut playlist).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;
pub mod genres;
pub mod media_files;
pub mod playlist_tracks;
pub mod playlists;

// Pure mapping core
pub mod metadata;
pub mod sql;

pub use context::{SqliteLibrary, SqlitePlaylistTracks};
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations.
///
/// Call once at startup to bring the schema up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://chorus.db`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = database_url, "opening sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
