/// Media file domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audio file in the library.
///
/// This is the denormalized attribute set that playlist tracks embed as a
/// value copy, so a playlist read does not fan out into per-track lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Unique media file identifier
    pub id: String,

    /// File path on disk
    pub path: String,

    /// Track title
    pub title: String,

    /// Album name
    pub album: String,

    /// Artist name
    pub artist: String,

    /// Artist identifier
    pub artist_id: String,

    /// Album artist name
    pub album_artist: String,

    /// Album identifier
    pub album_id: String,

    /// Track number within the disc
    pub track_number: i32,

    /// Disc number within the album
    pub disc_number: i32,

    /// Release year
    pub year: i32,

    /// File size in bytes
    pub size: i64,

    /// File extension without the dot
    pub suffix: String,

    /// Duration in seconds
    pub duration: f32,

    /// Bit rate in kbps
    pub bit_rate: i32,

    /// Genre tag
    pub genre: String,

    /// MusicBrainz recording id
    pub mbz_track_id: String,

    /// MusicBrainz release id
    pub mbz_album_id: String,

    /// MusicBrainz artist id
    pub mbz_artist_id: String,

    /// When the file was added to the library
    pub created_at: DateTime<Utc>,

    /// When the file record was last updated
    pub updated_at: DateTime<Utc>,
}

impl MediaFile {
    /// Create a placeholder media file carrying only an id.
    ///
    /// Playlist appends embed this until the caller re-reads the playlist
    /// with tracks; no I/O happens inside the model.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Default for MediaFile {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            path: String::new(),
            title: String::new(),
            album: String::new(),
            artist: String::new(),
            artist_id: String::new(),
            album_artist: String::new(),
            album_id: String::new(),
            track_number: 0,
            disc_number: 0,
            year: 0,
            size: 0,
            suffix: String::new(),
            duration: 0.0,
            bit_rate: 0,
            genre: String::new(),
            mbz_track_id: String::new(),
            mbz_album_id: String::new(),
            mbz_artist_id: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
