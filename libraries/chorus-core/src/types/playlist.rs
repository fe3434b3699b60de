/// Playlist domain types
use crate::criteria::Criteria;
use crate::types::MediaFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist, either a plain ordered track list or a smart playlist whose
/// membership is computed from attached criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier (assigned on first save when empty)
    pub id: String,

    /// Playlist name
    pub name: String,

    /// Free-form comment
    pub comment: String,

    /// Aggregate duration of all tracks, in seconds
    pub duration: f32,

    /// Aggregate size of all tracks, in bytes
    pub size: i64,

    /// Number of tracks
    pub song_count: i32,

    /// Display name of the owner (resolved by the caller, never persisted)
    pub owner_name: String,

    /// Owner user identifier
    pub owner_id: String,

    /// Whether the playlist is visible to other users
    pub public: bool,

    /// Ordered tracks; playback order
    pub tracks: PlaylistTracks,

    /// Path of the imported playlist file, if any
    pub path: String,

    /// Whether the playlist is kept in sync with its file
    pub sync: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Smart-playlist criteria, when attached
    pub rules: Option<Criteria>,

    /// When the criteria were last evaluated
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl Playlist {
    /// Create an empty playlist with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A playlist is smart iff criteria are attached and carry a non-empty
    /// expression.
    pub fn is_smart_playlist(&self) -> bool {
        self.rules
            .as_ref()
            .is_some_and(|rules| rules.expression.as_ref().is_some_and(|e| !e.is_empty()))
    }

    /// The embedded media files, in playback order.
    pub fn media_files(&self) -> Vec<MediaFile> {
        media_files_of(&self.tracks)
    }

    /// Append one track per media file id, embedding an id-only placeholder.
    ///
    /// Position ids continue after the current length and are 1-based.
    pub fn add_tracks(&mut self, media_file_ids: &[String]) {
        let mut pos = self.tracks.len();
        for mf_id in media_file_ids {
            pos += 1;
            self.tracks.push(PlaylistTrack {
                id: pos.to_string(),
                media_file_id: mf_id.clone(),
                playlist_id: self.id.clone(),
                media_file: MediaFile::placeholder(mf_id.clone()),
            });
        }
    }

    /// Append one track per media file, embedding the full value copy.
    pub fn add_media_files(&mut self, media_files: &[MediaFile]) {
        let mut pos = self.tracks.len();
        for mf in media_files {
            pos += 1;
            self.tracks.push(PlaylistTrack {
                id: pos.to_string(),
                media_file_id: mf.id.clone(),
                playlist_id: self.id.clone(),
                media_file: mf.clone(),
            });
        }
    }

    /// Drop the tracks at the given 0-based indices, keeping the relative
    /// order of the survivors.
    ///
    /// Surviving ids are intentionally NOT renumbered; a later append
    /// continues from the new length. Out-of-range indices match nothing.
    pub fn remove_tracks(&mut self, idx_to_remove: &[usize]) {
        let mut new_tracks = PlaylistTracks::with_capacity(self.tracks.len());
        for (i, track) in self.tracks.iter().enumerate() {
            if idx_to_remove.contains(&i) {
                continue;
            }
            new_tracks.push(track.clone());
        }
        self.tracks = new_tracks;
    }
}

impl Default for Playlist {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: String::new(),
            comment: String::new(),
            duration: 0.0,
            size: 0,
            song_count: 0,
            owner_name: String::new(),
            owner_id: String::new(),
            public: false,
            tracks: PlaylistTracks::new(),
            path: String::new(),
            sync: false,
            created_at: now,
            updated_at: now,
            rules: None,
            evaluated_at: None,
        }
    }
}

/// One entry of a playlist.
///
/// `id` is the 1-based position string assigned when the track was
/// appended; it is unique at assignment time but not stable across
/// removals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: String,
    pub media_file_id: String,
    pub playlist_id: String,
    pub media_file: MediaFile,
}

/// Ordered playlist entries; index order is playback order.
pub type PlaylistTracks = Vec<PlaylistTrack>;

/// Project the embedded media files out of a track list, preserving order.
pub fn media_files_of(tracks: &[PlaylistTrack]) -> Vec<MediaFile> {
    tracks.iter().map(|t| t.media_file.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{Criteria, Expression};
    use serde_json::json;

    fn playlist_with_tracks(n: usize) -> Playlist {
        let mut pls = Playlist::new("test");
        pls.id = "pls-1".to_string();
        let ids: Vec<String> = (0..n).map(|i| format!("mf-{i}")).collect();
        pls.add_tracks(&ids);
        pls
    }

    #[test]
    fn add_tracks_assigns_sequential_positions() {
        let pls = playlist_with_tracks(3);

        let ids: Vec<&str> = pls.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(pls.tracks.iter().all(|t| t.playlist_id == "pls-1"));
    }

    #[test]
    fn add_tracks_continues_after_existing_entries() {
        let mut pls = playlist_with_tracks(2);
        pls.add_tracks(&["mf-9".to_string()]);

        assert_eq!(pls.tracks.len(), 3);
        assert_eq!(pls.tracks[2].id, "3");
        // pre-existing ids untouched
        assert_eq!(pls.tracks[0].id, "1");
        assert_eq!(pls.tracks[1].id, "2");
    }

    #[test]
    fn add_tracks_embeds_id_only_placeholder() {
        let pls = playlist_with_tracks(1);

        assert_eq!(pls.tracks[0].media_file.id, "mf-0");
        assert!(pls.tracks[0].media_file.title.is_empty());
        assert!(pls.tracks[0].media_file.path.is_empty());
    }

    #[test]
    fn add_media_files_embeds_full_copies() {
        let mut pls = Playlist::new("test");
        let mf = MediaFile {
            id: "mf-1".to_string(),
            title: "Song".to_string(),
            ..MediaFile::default()
        };
        pls.add_media_files(&[mf.clone()]);

        assert_eq!(pls.tracks[0].media_file, mf);
        assert_eq!(pls.tracks[0].media_file_id, "mf-1");
    }

    #[test]
    fn remove_tracks_preserves_order_and_ids() {
        let mut pls = playlist_with_tracks(5);
        pls.remove_tracks(&[1, 3]);

        let ids: Vec<&str> = pls.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "5"]);
        let mf_ids: Vec<&str> = pls.tracks.iter().map(|t| t.media_file_id.as_str()).collect();
        assert_eq!(mf_ids, ["mf-0", "mf-2", "mf-4"]);
    }

    #[test]
    fn remove_tracks_ignores_out_of_range_indices() {
        let mut pls = playlist_with_tracks(2);
        pls.remove_tracks(&[7, 42]);

        assert_eq!(pls.tracks.len(), 2);
    }

    #[test]
    fn append_after_removal_reuses_stale_positions() {
        let mut pls = playlist_with_tracks(3);
        pls.remove_tracks(&[0]);
        pls.add_tracks(&["mf-new".to_string()]);

        // length was 2 after removal, so the new entry gets "3" even though
        // a surviving track already carries that id
        let ids: Vec<&str> = pls.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "3"]);
    }

    #[test]
    fn media_files_projection_preserves_order() {
        let pls = playlist_with_tracks(3);
        let mfs = pls.media_files();

        let ids: Vec<&str> = mfs.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["mf-0", "mf-1", "mf-2"]);
    }

    #[test]
    fn smart_playlist_requires_a_non_empty_expression() {
        let mut pls = Playlist::new("smart");
        assert!(!pls.is_smart_playlist());

        pls.rules = Some(Criteria::default());
        assert!(!pls.is_smart_playlist());

        pls.rules = Some(Criteria {
            expression: Some(Expression::new(json!({}))),
            ..Criteria::default()
        });
        assert!(!pls.is_smart_playlist());

        pls.rules = Some(Criteria {
            expression: Some(Expression::new(json!({"all": [{"gt": {"rating": 3}}]}))),
            ..Criteria::default()
        });
        assert!(pls.is_smart_playlist());
    }
}
