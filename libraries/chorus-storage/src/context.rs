use crate::{albums, media_files, playlist_tracks, playlists};
use async_trait::async_trait;
use chorus_core::error::Result;
use chorus_core::storage::{PlaylistRepository, PlaylistTrackRepository, QueryOptions};
use chorus_core::types::{Album, DiscId, MediaFile, Playlist};
use sqlx::SqlitePool;

/// `SQLite`-backed library storage.
///
/// Implements the core repository traits by delegating to the vertical
/// slices; the track sub-repository is handed out scoped to one playlist.
pub struct SqliteLibrary {
    pool: SqlitePool,
}

impl SqliteLibrary {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Media files

    pub async fn put_media_file(&self, mf: &mut MediaFile) -> Result<()> {
        media_files::put(&self.pool, mf).await.map_err(Into::into)
    }

    pub async fn get_media_file(&self, id: &str) -> Result<Option<MediaFile>> {
        media_files::get(&self.pool, id).await.map_err(Into::into)
    }

    pub async fn delete_media_file(&self, id: &str) -> Result<()> {
        media_files::delete(&self.pool, id).await.map_err(Into::into)
    }

    // Albums

    pub async fn refresh_albums(&self, album_ids: &[String]) -> Result<usize> {
        albums::refresh(&self.pool, album_ids).await.map_err(Into::into)
    }

    pub async fn get_album(&self, id: &str) -> Result<Option<Album>> {
        albums::get(&self.pool, id).await.map_err(Into::into)
    }
}

#[async_trait]
impl PlaylistRepository for SqliteLibrary {
    type Tracks = SqlitePlaylistTracks;

    fn tracks(&self, playlist_id: &str) -> SqlitePlaylistTracks {
        SqlitePlaylistTracks {
            pool: self.pool.clone(),
            playlist_id: playlist_id.to_string(),
        }
    }

    async fn put(&self, playlist: &mut Playlist) -> Result<()> {
        playlists::put(&self.pool, playlist).await.map_err(Into::into)
    }

    async fn get(&self, id: &str) -> Result<Option<Playlist>> {
        playlists::get(&self.pool, id).await.map_err(Into::into)
    }

    async fn get_with_tracks(&self, id: &str) -> Result<Option<Playlist>> {
        playlists::get_with_tracks(&self.pool, id).await.map_err(Into::into)
    }

    async fn get_all(&self, options: QueryOptions) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool, options).await.map_err(Into::into)
    }

    async fn find_by_path(&self, path: &str) -> Result<Option<Playlist>> {
        playlists::find_by_path(&self.pool, path).await.map_err(Into::into)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        playlists::delete(&self.pool, id).await.map_err(Into::into)
    }

    async fn refresh_status(&self, playlist_id: &str) -> Result<()> {
        playlists::refresh_status(&self.pool, playlist_id)
            .await
            .map_err(Into::into)
    }
}

/// Track sub-repository bound to one playlist.
pub struct SqlitePlaylistTracks {
    pool: SqlitePool,
    playlist_id: String,
}

#[async_trait]
impl PlaylistTrackRepository for SqlitePlaylistTracks {
    async fn add(&self, media_file_ids: &[String]) -> Result<usize> {
        playlist_tracks::add(&self.pool, &self.playlist_id, media_file_ids)
            .await
            .map_err(Into::into)
    }

    async fn add_albums(&self, album_ids: &[String]) -> Result<usize> {
        playlist_tracks::add_albums(&self.pool, &self.playlist_id, album_ids)
            .await
            .map_err(Into::into)
    }

    async fn add_artists(&self, artist_ids: &[String]) -> Result<usize> {
        playlist_tracks::add_artists(&self.pool, &self.playlist_id, artist_ids)
            .await
            .map_err(Into::into)
    }

    async fn add_discs(&self, discs: &[DiscId]) -> Result<usize> {
        playlist_tracks::add_discs(&self.pool, &self.playlist_id, discs)
            .await
            .map_err(Into::into)
    }

    async fn delete(&self, track_ids: &[String]) -> Result<()> {
        playlist_tracks::delete(&self.pool, &self.playlist_id, track_ids)
            .await
            .map_err(Into::into)
    }

    async fn reorder(&self, pos: usize, new_pos: usize) -> Result<()> {
        playlist_tracks::reorder(&self.pool, &self.playlist_id, pos, new_pos)
            .await
            .map_err(Into::into)
    }
}
