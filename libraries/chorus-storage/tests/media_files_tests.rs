//! Integration tests for the media file slice


use chorus_core::types::MediaFile;
use chorus_storage::media_files;
use test_helpers::*;

#[tokio::test]
async fn put_and_get_round_trip() {
    let db = TestDb::new().await;

    let mut mf = media_file("mf-1");
    mf.album = "The Album".to_string();
    mf.artist = "The Artist".to_string();
    mf.track_number = 7;
    mf.disc_number = 2;
    mf.year = 1984;
    mf.duration = 241.5;
    mf.mbz_track_id = "mbz-t".to_string();
    media_files::put(db.pool(), &mut mf).await.unwrap();

    let stored = media_files::get(db.pool(), "mf-1").await.unwrap().unwrap();
    assert_eq!(stored, mf);
}

#[tokio::test]
async fn put_assigns_an_id_when_missing() {
    let db = TestDb::new().await;

    let mut mf = MediaFile {
        title: "Untracked".to_string(),
        ..MediaFile::default()
    };
    media_files::put(db.pool(), &mut mf).await.unwrap();
    assert!(!mf.id.is_empty());

    let stored = media_files::get(db.pool(), &mf.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Untracked");
}

#[tokio::test]
async fn put_twice_updates_in_place() {
    let db = TestDb::new().await;
    let mut mf = put_media_file(db.pool(), media_file("mf-1")).await;

    mf.path = "/music/moved/mf-1.mp3".to_string();
    media_files::put(db.pool(), &mut mf).await.unwrap();

    let stored = media_files::get(db.pool(), "mf-1").await.unwrap().unwrap();
    assert_eq!(stored.path, "/music/moved/mf-1.mp3");

    let all = media_files::get_by_ids(db.pool(), &["mf-1".to_string()])
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn get_by_ids_with_nothing_asks_nothing() {
    let db = TestDb::new().await;

    let found = media_files::get_by_ids(db.pool(), &[]).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn delete_removes_the_row() {
    let db = TestDb::new().await;
    put_media_file(db.pool(), media_file("mf-1")).await;

    media_files::delete(db.pool(), "mf-1").await.unwrap();

    assert!(media_files::get(db.pool(), "mf-1").await.unwrap().is_none());
}
