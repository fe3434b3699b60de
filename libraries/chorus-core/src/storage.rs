//! Repository traits for the persistence layer
//!
//! These abstract the storage operations so the server/API layer can run
//! against the `SQLite` implementation in `chorus-storage` or a mock.

use crate::error::Result;
use crate::types::{DiscId, Playlist};
use async_trait::async_trait;

/// Paging and ordering options for list queries.
///
/// `sort` must name a sortable column of the target entity; unknown
/// columns fall back to the implementation default.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub sort: Option<String>,
    pub descending: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Playlist repository surface.
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// The track sub-repository handed out by [`Self::tracks`]
    type Tracks: PlaylistTrackRepository;

    /// The track sub-repository, scoped to one playlist
    fn tracks(&self, playlist_id: &str) -> Self::Tracks;

    /// Insert or update a playlist; assigns an id on first save and, for
    /// plain playlists, replaces the stored track rows.
    async fn put(&self, playlist: &mut Playlist) -> Result<()>;

    /// Get playlist header by id (tracks left empty)
    async fn get(&self, id: &str) -> Result<Option<Playlist>>;

    /// Get playlist with its ordered tracks and embedded media files
    async fn get_with_tracks(&self, id: &str) -> Result<Option<Playlist>>;

    /// Get all playlists, honoring sort/paging options
    async fn get_all(&self, options: QueryOptions) -> Result<Vec<Playlist>>;

    /// Find the playlist imported from the given file path
    async fn find_by_path(&self, path: &str) -> Result<Option<Playlist>>;

    /// Delete a playlist and its track rows
    async fn delete(&self, id: &str) -> Result<()>;

    /// Recompute the song count / duration / size aggregates
    async fn refresh_status(&self, playlist_id: &str) -> Result<()>;
}

/// Track sub-repository, scoped to one playlist.
#[async_trait]
pub trait PlaylistTrackRepository: Send + Sync {
    /// Append tracks by media file id; returns the number added
    async fn add(&self, media_file_ids: &[String]) -> Result<usize>;

    /// Append every media file of the given albums, in album order
    async fn add_albums(&self, album_ids: &[String]) -> Result<usize>;

    /// Append every media file of the given artists
    async fn add_artists(&self, artist_ids: &[String]) -> Result<usize>;

    /// Append every media file of the given discs, in track order
    async fn add_discs(&self, discs: &[DiscId]) -> Result<usize>;

    /// Delete the tracks with the given position ids; surviving ids are
    /// not renumbered
    async fn delete(&self, track_ids: &[String]) -> Result<()>;

    /// Move the track at 1-based position `pos` to `new_pos`, rewriting
    /// positions sequentially
    async fn reorder(&self, pos: usize, new_pos: usize) -> Result<()>;
}
