//! Integration tests for the playlist slice


use chorus_core::criteria::{Criteria, Expression};
use chorus_core::storage::QueryOptions;
use chorus_core::types::{MediaFile, Playlist, PlaylistTrack};
use chorus_storage::{playlist_tracks, playlists};
use serde_json::json;
use test_helpers::*;

#[tokio::test]
async fn put_assigns_id_and_round_trips() {
    let db = TestDb::new().await;

    let mut pls = Playlist::new("Morning Mix");
    pls.comment = "wake up".to_string();
    pls.owner_id = "user-1".to_string();
    pls.public = true;
    pls.sync = true;
    pls.path = "/playlists/morning.m3u".to_string();

    playlists::put(db.pool(), &mut pls).await.unwrap();
    assert!(!pls.id.is_empty());

    let stored = playlists::get(db.pool(), &pls.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Morning Mix");
    assert_eq!(stored.comment, "wake up");
    assert_eq!(stored.owner_id, "user-1");
    assert!(stored.public);
    assert!(stored.sync);
    assert_eq!(stored.path, "/playlists/morning.m3u");
    // nanosecond precision survives the text round trip
    assert_eq!(stored.created_at, pls.created_at);
    assert_eq!(stored.updated_at, pls.updated_at);
    assert!(stored.tracks.is_empty());
    assert!(stored.rules.is_none());
    assert!(stored.evaluated_at.is_none());
}

#[tokio::test]
async fn put_with_tracks_keeps_updated_at_consistent() {
    let db = TestDb::new().await;
    let mf = put_media_file(db.pool(), media_file("mf-1")).await;

    // the aggregate refresh after the track rewrite must not move
    // updated_at past the value put just assigned
    let mut pls = Playlist::new("Consistent");
    pls.add_media_files(&[mf]);
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get(db.pool(), &pls.id).await.unwrap().unwrap();
    assert_eq!(stored.updated_at, pls.updated_at);
    assert_eq!(stored.created_at, pls.created_at);
    assert_eq!(stored.song_count, 1);
}

#[tokio::test]
async fn put_twice_updates_in_place() {
    let db = TestDb::new().await;

    let mut pls = create_playlist(db.pool(), "Old Name").await;
    pls.name = "New Name".to_string();
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let all = playlists::get_all(db.pool(), QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "New Name");
    assert_eq!(all[0].id, pls.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
    let db = TestDb::new().await;

    let stored = playlists::get(db.pool(), "missing").await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn put_persists_smart_playlist_rules() {
    let db = TestDb::new().await;

    let mut pls = Playlist::new("Recently Played");
    pls.rules = Some(Criteria {
        expression: Some(Expression::new(
            json!({"all": [{"gt": {"play_count": 5}}]}),
        )),
        sort: "title".to_string(),
        order: "asc".to_string(),
        limit: Some(100),
        offset: 0,
    });
    // in-memory tracks of a smart playlist are never written
    pls.add_tracks(&["mf-ignored".to_string()]);

    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get_with_tracks(db.pool(), &pls.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_smart_playlist());
    assert_eq!(stored.rules, pls.rules);
    assert!(stored.tracks.is_empty());
}

#[tokio::test]
async fn put_replaces_stored_track_rows() {
    let db = TestDb::new().await;
    let first = put_media_file(db.pool(), media_file("mf-1")).await;
    let second = put_media_file(db.pool(), media_file("mf-2")).await;

    let mut pls = Playlist::new("Roadtrip");
    pls.add_media_files(&[first.clone(), second.clone()]);
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get_with_tracks(db.pool(), &pls.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.song_count, 2);
    assert_eq!(stored.tracks.len(), 2);
    assert_eq!(stored.tracks[0].media_file.title, "Title mf-1");
    assert_eq!(stored.tracks[1].media_file.title, "Title mf-2");

    // dropping the first entry and saving again rewrites the rows
    pls.remove_tracks(&[0]);
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get_with_tracks(db.pool(), &pls.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.song_count, 1);
    assert_eq!(stored.tracks.len(), 1);
    assert_eq!(stored.tracks[0].media_file_id, "mf-2");
}

#[tokio::test]
async fn get_with_tracks_orders_positions_numerically() {
    let db = TestDb::new().await;
    put_media_file(db.pool(), media_file("mf-a")).await;
    put_media_file(db.pool(), media_file("mf-b")).await;

    // "10" sorts before "2" as text; playback order must be numeric
    let mut pls = Playlist::new("Ordered");
    pls.tracks.push(PlaylistTrack {
        id: "10".to_string(),
        media_file_id: "mf-a".to_string(),
        playlist_id: String::new(),
        media_file: MediaFile::placeholder("mf-a"),
    });
    pls.tracks.push(PlaylistTrack {
        id: "2".to_string(),
        media_file_id: "mf-b".to_string(),
        playlist_id: String::new(),
        media_file: MediaFile::placeholder("mf-b"),
    });
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get_with_tracks(db.pool(), &pls.id)
        .await
        .unwrap()
        .unwrap();
    let order: Vec<&str> = stored
        .tracks
        .iter()
        .map(|t| t.media_file_id.as_str())
        .collect();
    assert_eq!(order, ["mf-b", "mf-a"]);
    assert_eq!(stored.tracks[0].id, "2");
    assert_eq!(stored.tracks[1].id, "10");
}

#[tokio::test]
async fn get_with_tracks_placeholders_missing_media_files() {
    let db = TestDb::new().await;
    let real = put_media_file(db.pool(), media_file("mf-real")).await;

    let mut pls = Playlist::new("Partially Gone");
    pls.add_tracks(&[real.id.clone(), "mf-ghost".to_string()]);
    playlists::put(db.pool(), &mut pls).await.unwrap();

    let stored = playlists::get_with_tracks(db.pool(), &pls.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.tracks.len(), 2);
    assert_eq!(stored.tracks[0].media_file.title, "Title mf-real");
    assert_eq!(stored.tracks[1].media_file.id, "mf-ghost");
    assert!(stored.tracks[1].media_file.title.is_empty());
    // aggregates only count files that still exist
    assert_eq!(stored.song_count, 1);
}

#[tokio::test]
async fn get_all_sorts_and_pages() {
    let db = TestDb::new().await;
    create_playlist(db.pool(), "Beta").await;
    create_playlist(db.pool(), "Alpha").await;
    create_playlist(db.pool(), "Gamma").await;

    let names = |playlists: &[Playlist]| -> Vec<String> {
        playlists.iter().map(|p| p.name.clone()).collect()
    };

    let all = playlists::get_all(db.pool(), QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(names(&all), ["Alpha", "Beta", "Gamma"]);

    let descending = playlists::get_all(
        db.pool(),
        QueryOptions {
            descending: true,
            ..QueryOptions::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(names(&descending), ["Gamma", "Beta", "Alpha"]);

    let page = playlists::get_all(
        db.pool(),
        QueryOptions {
            limit: Some(1),
            offset: Some(1),
            ..QueryOptions::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(names(&page), ["Beta"]);

    let rest = playlists::get_all(
        db.pool(),
        QueryOptions {
            offset: Some(1),
            ..QueryOptions::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(names(&rest), ["Beta", "Gamma"]);
}

#[tokio::test]
async fn get_all_rejects_unknown_sort_columns() {
    let db = TestDb::new().await;
    create_playlist(db.pool(), "Beta").await;
    create_playlist(db.pool(), "Alpha").await;

    // not in the allowlist; falls back to name ascending
    let all = playlists::get_all(
        db.pool(),
        QueryOptions {
            sort: Some("owner_id; drop table playlist".to_string()),
            ..QueryOptions::default()
        },
    )
    .await
    .unwrap();
    let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta"]);
}

#[tokio::test]
async fn find_by_path_matches_imported_playlists() {
    let db = TestDb::new().await;

    let mut imported = Playlist::new("Imported");
    imported.path = "/import/list.m3u".to_string();
    playlists::put(db.pool(), &mut imported).await.unwrap();
    create_playlist(db.pool(), "Manual").await;

    let found = playlists::find_by_path(db.pool(), "/import/list.m3u")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, imported.id);

    let missing = playlists::find_by_path(db.pool(), "/import/other.m3u")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn delete_cascades_to_track_rows() {
    let db = TestDb::new().await;
    let mf = put_media_file(db.pool(), media_file("mf-1")).await;
    let pls = create_playlist(db.pool(), "Doomed").await;
    playlist_tracks::add(db.pool(), &pls.id, &[mf.id.clone()])
        .await
        .unwrap();

    playlists::delete(db.pool(), &pls.id).await.unwrap();

    assert!(playlists::get(db.pool(), &pls.id).await.unwrap().is_none());
    let rows = track_rows(db.pool(), &pls.id).await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn refresh_status_sums_durations_and_sizes() {
    let db = TestDb::new().await;
    let mut short = media_file("mf-short");
    short.duration = 100.0;
    short.size = 1000;
    let mut long = media_file("mf-long");
    long.duration = 200.5;
    long.size = 2000;
    let short = put_media_file(db.pool(), short).await;
    let long = put_media_file(db.pool(), long).await;

    let pls = create_playlist(db.pool(), "Stats").await;
    playlist_tracks::add(db.pool(), &pls.id, &[short.id, long.id])
        .await
        .unwrap();

    let stored = playlists::get(db.pool(), &pls.id).await.unwrap().unwrap();
    assert_eq!(stored.song_count, 2);
    assert!((stored.duration - 300.5).abs() < 0.001);
    assert_eq!(stored.size, 3000);
}
