//! Chorus Core
//!
//! Domain types, repository traits, and error handling for the Chorus
//! media-library server.
//!
//! This crate is persistence-free: it defines the playlist/track model and
//! the repository surface, while `chorus-storage` provides the `SQLite`
//! implementation.
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::Playlist;
//!
//! let mut playlist = Playlist::new("Morning Mix");
//! playlist.add_tracks(&["track-1".to_string(), "track-2".to_string()]);
//!
//! assert_eq!(playlist.tracks.len(), 2);
//! assert!(!playlist.is_smart_playlist());
//! ```

#![forbid(unsafe_code)]

pub mod criteria;
pub mod error;
pub mod storage;
pub mod types;

pub use criteria::{Criteria, Expression};
pub use error::{ChorusError, Result};
pub use storage::{PlaylistRepository, PlaylistTrackRepository, QueryOptions};
pub use types::{
    Album, DiscId, Genre, MediaFile, Playlist, PlaylistTrack, PlaylistTracks,
};
