/// Album domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album, aggregated from its media files during refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub artist_id: String,
    pub album_artist: String,

    /// MusicBrainz release id, resolved by majority vote across the
    /// album's media files when their tags disagree
    pub mbz_album_id: String,

    /// Representative genre (first distinct genre across the files)
    pub genre: String,

    pub song_count: i32,
    pub duration: f32,
    pub size: i64,
    pub min_year: i32,
    pub max_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Album {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: String::new(),
            artist: String::new(),
            artist_id: String::new(),
            album_artist: String::new(),
            mbz_album_id: String::new(),
            genre: String::new(),
            song_count: 0,
            duration: 0.0,
            size: 0,
            min_year: 0,
            max_year: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Identifies one disc of an album.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscId {
    pub album_id: String,
    pub disc_number: i32,
}
