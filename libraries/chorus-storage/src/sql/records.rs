//! Field registrations for the persisted domain records.
//!
//! Declaration order here matches struct declaration order, so the
//! generated argument lists stay readable when logged.

use super::{SqlField, SqlRecord};
use chorus_core::types::{Album, MediaFile, Playlist, PlaylistTrack};

impl SqlRecord for Playlist {
    fn sql_fields(&self) -> Vec<SqlField> {
        vec![
            SqlField::with_column("id", "id", self.id.as_str()),
            SqlField::new("name", self.name.as_str()),
            SqlField::new("comment", self.comment.as_str()),
            SqlField::new("duration", self.duration),
            SqlField::new("size", self.size),
            SqlField::new("songCount", self.song_count),
            SqlField::skip("ownerName"),
            SqlField::with_column("ownerId", "owner_id", self.owner_id.as_str()),
            SqlField::new("public", self.public),
            SqlField::skip("tracks"),
            SqlField::new("path", self.path.as_str()),
            SqlField::new("sync", self.sync),
            SqlField::new("createdAt", self.created_at),
            SqlField::new("updatedAt", self.updated_at),
            // criteria are serialized separately by the repository
            SqlField::skip("rules"),
            SqlField::new("evaluatedAt", self.evaluated_at),
        ]
    }
}

impl SqlRecord for PlaylistTrack {
    fn sql_fields(&self) -> Vec<SqlField> {
        vec![
            SqlField::with_column("id", "id", self.id.as_str()),
            SqlField::with_column("mediaFileId", "media_file_id", self.media_file_id.as_str()),
            SqlField::with_column("playlistId", "playlist_id", self.playlist_id.as_str()),
            // embedded value copy, hydrated on read instead
            SqlField::skip("mediaFile"),
        ]
    }
}

impl SqlRecord for MediaFile {
    fn sql_fields(&self) -> Vec<SqlField> {
        vec![
            SqlField::with_column("id", "id", self.id.as_str()),
            SqlField::new("path", self.path.as_str()),
            SqlField::new("title", self.title.as_str()),
            SqlField::new("album", self.album.as_str()),
            SqlField::new("artist", self.artist.as_str()),
            SqlField::new("artistId", self.artist_id.as_str()),
            SqlField::new("albumArtist", self.album_artist.as_str()),
            SqlField::new("albumId", self.album_id.as_str()),
            SqlField::new("trackNumber", self.track_number),
            SqlField::new("discNumber", self.disc_number),
            SqlField::new("year", self.year),
            SqlField::new("size", self.size),
            SqlField::new("suffix", self.suffix.as_str()),
            SqlField::new("duration", self.duration),
            SqlField::new("bitRate", self.bit_rate),
            SqlField::new("genre", self.genre.as_str()),
            SqlField::new("mbzTrackId", self.mbz_track_id.as_str()),
            SqlField::new("mbzAlbumId", self.mbz_album_id.as_str()),
            SqlField::new("mbzArtistId", self.mbz_artist_id.as_str()),
            SqlField::new("createdAt", self.created_at),
            SqlField::new("updatedAt", self.updated_at),
        ]
    }
}

impl SqlRecord for Album {
    fn sql_fields(&self) -> Vec<SqlField> {
        vec![
            SqlField::with_column("id", "id", self.id.as_str()),
            SqlField::new("name", self.name.as_str()),
            SqlField::new("artist", self.artist.as_str()),
            SqlField::new("artistId", self.artist_id.as_str()),
            SqlField::new("albumArtist", self.album_artist.as_str()),
            SqlField::new("mbzAlbumId", self.mbz_album_id.as_str()),
            SqlField::new("genre", self.genre.as_str()),
            SqlField::new("songCount", self.song_count),
            SqlField::new("duration", self.duration),
            SqlField::new("size", self.size),
            SqlField::new("minYear", self.min_year),
            SqlField::new("maxYear", self.max_year),
            SqlField::new("createdAt", self.created_at),
            SqlField::new("updatedAt", self.updated_at),
        ]
    }
}
