//! Media file vertical slice.
//!
//! The seeding surface the playlist slices select from; writes route
//! through the record mapper like every other slice.

use crate::error::Result;
use crate::sql::{
    bind_value, check, exists, insert_sql, parse_timestamp, to_sql_args, update_sql,
};
use chorus_core::types::MediaFile;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub(crate) const MEDIA_FILE_COLUMNS: &str = "id, path, title, album, artist, artist_id, \
     album_artist, album_id, track_number, disc_number, year, size, suffix, duration, \
     bit_rate, genre, mbz_track_id, mbz_album_id, mbz_artist_id, created_at, updated_at";

/// Insert or update a media file, assigning an id on first save.
pub async fn put(pool: &SqlitePool, mf: &mut MediaFile) -> Result<()> {
    let now = Utc::now();
    if mf.id.is_empty() {
        mf.id = Uuid::new_v4().to_string();
        mf.created_at = now;
    }
    mf.updated_at = now;

    let args = to_sql_args(mf)?;
    let already = check(pool, &exists("media_file", [("id", mf.id.as_str())])).await?;

    if already {
        let sql = update_sql("media_file", &args, "id");
        let mut query = sqlx::query(&sql);
        for (column, value) in &args {
            if column != "id" {
                query = bind_value(query, value);
            }
        }
        query = query.bind(mf.id.clone());
        query.execute(pool).await?;
    } else {
        let sql = insert_sql("media_file", &args);
        let mut query = sqlx::query(&sql);
        for (_, value) in &args {
            query = bind_value(query, value);
        }
        query.execute(pool).await?;
    }

    Ok(())
}

/// Get a media file by id.
pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<MediaFile>> {
    let row = sqlx::query(&format!(
        "SELECT {MEDIA_FILE_COLUMNS} FROM media_file WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| from_row(&row)).transpose()
}

/// Get several media files by id, in no particular order.
pub async fn get_by_ids(pool: &SqlitePool, ids: &[String]) -> Result<Vec<MediaFile>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT {MEDIA_FILE_COLUMNS} FROM media_file WHERE id IN ({placeholders})"
    );
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

/// Delete a media file.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM media_file WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub(crate) fn from_row(row: &SqliteRow) -> Result<MediaFile> {
    Ok(MediaFile {
        id: row.get("id"),
        path: row.get("path"),
        title: row.get("title"),
        album: row.get("album"),
        artist: row.get("artist"),
        artist_id: row.get("artist_id"),
        album_artist: row.get("album_artist"),
        album_id: row.get("album_id"),
        track_number: row.get::<i64, _>("track_number") as i32,
        disc_number: row.get::<i64, _>("disc_number") as i32,
        year: row.get::<i64, _>("year") as i32,
        size: row.get("size"),
        suffix: row.get("suffix"),
        duration: row.get::<f64, _>("duration") as f32,
        bit_rate: row.get::<i64, _>("bit_rate") as i32,
        genre: row.get("genre"),
        mbz_track_id: row.get("mbz_track_id"),
        mbz_album_id: row.get("mbz_album_id"),
        mbz_artist_id: row.get("mbz_artist_id"),
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}
