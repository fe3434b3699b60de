//! Playlist track vertical slice, scoped to one playlist.
//!
//! Position ids are 1-based strings assigned on append, continuing after
//! the current row count. Removal filters rows out without renumbering
//! the survivors; only an explicit `reorder` rewrites positions.

use crate::error::{Result, StorageError};
use crate::playlists;
use crate::sql::{bind_value, check, exists, insert_sql, to_sql_args};
use chorus_core::types::{DiscId, MediaFile, PlaylistTrack};
use sqlx::{Row, SqlitePool};

/// Append tracks by media file id; returns the number appended.
pub async fn add(pool: &SqlitePool, playlist_id: &str, media_file_ids: &[String]) -> Result<usize> {
    if media_file_ids.is_empty() {
        return Ok(0);
    }

    let known = check(pool, &exists("playlist", [("id", playlist_id)])).await?;
    if !known {
        return Err(StorageError::not_found("playlist", playlist_id));
    }

    let mut tx = pool.begin().await?;

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
            .bind(playlist_id)
            .fetch_one(&mut *tx)
            .await?;

    let mut pos = count as usize;
    for mf_id in media_file_ids {
        pos += 1;
        let track = PlaylistTrack {
            id: pos.to_string(),
            media_file_id: mf_id.clone(),
            playlist_id: playlist_id.to_string(),
            media_file: MediaFile::placeholder(mf_id.clone()),
        };
        let args = to_sql_args(&track)?;
        let sql = insert_sql("playlist_tracks", &args);
        let mut query = sqlx::query(&sql);
        for (_, value) in &args {
            query = bind_value(query, value);
        }
        query.execute(&mut *tx).await?;
    }

    tx.commit().await?;

    playlists::refresh_status(pool, playlist_id).await?;
    tracing::debug!(playlist_id, added = media_file_ids.len(), "appended tracks");
    Ok(media_file_ids.len())
}

/// Append every media file of the given albums, in album/disc/track order.
pub async fn add_albums(
    pool: &SqlitePool,
    playlist_id: &str,
    album_ids: &[String],
) -> Result<usize> {
    let mf_ids = media_file_ids_where(pool, "album_id", album_ids).await?;
    add(pool, playlist_id, &mf_ids).await
}

/// Append every media file of the given artists, in album/disc/track order.
pub async fn add_artists(
    pool: &SqlitePool,
    playlist_id: &str,
    artist_ids: &[String],
) -> Result<usize> {
    let mf_ids = media_file_ids_where(pool, "artist_id", artist_ids).await?;
    add(pool, playlist_id, &mf_ids).await
}

/// Append every media file of the given discs, in track order.
pub async fn add_discs(pool: &SqlitePool, playlist_id: &str, discs: &[DiscId]) -> Result<usize> {
    let mut mf_ids = Vec::new();
    for disc in discs {
        let rows = sqlx::query(
            "SELECT id FROM media_file
             WHERE album_id = ? AND disc_number = ?
             ORDER BY track_number",
        )
        .bind(&disc.album_id)
        .bind(disc.disc_number)
        .fetch_all(pool)
        .await?;
        mf_ids.extend(rows.iter().map(|row| row.get::<String, _>("id")));
    }
    add(pool, playlist_id, &mf_ids).await
}

/// Delete the rows with the given position ids.
///
/// Surviving rows keep their ids; ids that match nothing are silently
/// ignored.
pub async fn delete(pool: &SqlitePool, playlist_id: &str, track_ids: &[String]) -> Result<()> {
    if track_ids.is_empty() {
        return Ok(());
    }

    let placeholders = vec!["?"; track_ids.len()].join(", ");
    let sql = format!(
        "DELETE FROM playlist_tracks WHERE playlist_id = ? AND id IN ({placeholders})"
    );
    let mut query = sqlx::query(&sql).bind(playlist_id);
    for track_id in track_ids {
        query = query.bind(track_id);
    }
    query.execute(pool).await?;

    playlists::refresh_status(pool, playlist_id).await
}

/// Move the track at 1-based position `pos` to `new_pos`, rewriting all
/// position ids sequentially.
pub async fn reorder(
    pool: &SqlitePool,
    playlist_id: &str,
    pos: usize,
    new_pos: usize,
) -> Result<()> {
    let rows = sqlx::query(
        "SELECT rowid FROM playlist_tracks
         WHERE playlist_id = ?
         ORDER BY CAST(id AS INTEGER), rowid",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    let mut order: Vec<i64> = rows.iter().map(|row| row.get::<i64, _>("rowid")).collect();
    if pos == 0 || pos > order.len() || new_pos == 0 || new_pos > order.len() {
        return Err(StorageError::invalid_input(format!(
            "cannot move track {pos} to {new_pos} in a playlist of {} tracks",
            order.len()
        )));
    }
    if pos == new_pos {
        return Ok(());
    }

    let moved = order.remove(pos - 1);
    order.insert(new_pos - 1, moved);

    let mut tx = pool.begin().await?;
    for (i, rowid) in order.iter().enumerate() {
        sqlx::query("UPDATE playlist_tracks SET id = ? WHERE rowid = ?")
            .bind((i + 1).to_string())
            .bind(rowid)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    playlists::refresh_status(pool, playlist_id).await
}

async fn media_file_ids_where(
    pool: &SqlitePool,
    column: &str,
    ids: &[String],
) -> Result<Vec<String>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT id FROM media_file
         WHERE {column} IN ({placeholders})
         ORDER BY album, disc_number, track_number"
    );
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(pool).await?;
    Ok(rows.iter().map(|row| row.get::<String, _>("id")).collect())
}
