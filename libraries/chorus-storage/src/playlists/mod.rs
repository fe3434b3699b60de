//! Playlist vertical slice.
//!
//! Writes route through the record mapper; the criteria tree is not part
//! of the generic mapping and is serialized alongside as JSON text.

use crate::error::Result;
use crate::media_files;
use crate::sql::{
    bind_value, check, exists, format_timestamp, insert_sql, parse_timestamp, to_sql_args,
    update_sql, SqlValue,
};
use chorus_core::storage::QueryOptions;
use chorus_core::types::{MediaFile, Playlist, PlaylistTrack, PlaylistTracks};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use uuid::Uuid;

const PLAYLIST_COLUMNS: &str = "id, name, comment, duration, size, song_count, owner_id, \
     public, path, sync, created_at, updated_at, rules, evaluated_at";

/// Columns `get_all` accepts for ordering; anything else falls back to
/// the default with a warning.
const SORTABLE_COLUMNS: [&str; 5] = ["name", "created_at", "updated_at", "song_count", "duration"];

/// Insert or update a playlist.
///
/// Assigns a fresh id on first save. For plain playlists the stored track
/// rows are replaced from the in-memory list and the aggregates refreshed;
/// smart playlists keep their evaluated rows untouched.
pub async fn put(pool: &SqlitePool, pls: &mut Playlist) -> Result<()> {
    let now = Utc::now();
    if pls.id.is_empty() {
        pls.id = Uuid::new_v4().to_string();
        pls.created_at = now;
    }
    pls.updated_at = now;

    let mut args = to_sql_args(pls)?;
    let rules = match &pls.rules {
        Some(criteria) => SqlValue::Text(serde_json::to_string(criteria)?),
        None => SqlValue::Null,
    };
    args.push(("rules".to_string(), rules));

    let already = check(pool, &exists("playlist", [("id", pls.id.as_str())])).await?;
    if already {
        let sql = update_sql("playlist", &args, "id");
        let mut query = sqlx::query(&sql);
        for (column, value) in &args {
            if column != "id" {
                query = bind_value(query, value);
            }
        }
        query = query.bind(pls.id.clone());
        query.execute(pool).await?;
    } else {
        let sql = insert_sql("playlist", &args);
        let mut query = sqlx::query(&sql);
        for (_, value) in &args {
            query = bind_value(query, value);
        }
        query.execute(pool).await?;
    }

    if !pls.is_smart_playlist() {
        update_tracks(pool, &pls.id, &pls.tracks).await?;
        // keep the row's updated_at equal to the value just written, so
        // the caller's Playlist round-trips exactly
        refresh_status_at(pool, &pls.id, pls.updated_at).await?;
    }

    Ok(())
}

/// Get a playlist header by id; `tracks` is left empty.
pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlist WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| from_row(&row)).transpose()
}

/// Get a playlist with its ordered tracks, each embedding the full media
/// file when it still exists (an id-only placeholder otherwise).
pub async fn get_with_tracks(pool: &SqlitePool, id: &str) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get(pool, id).await? else {
        return Ok(None);
    };

    let rows = sqlx::query(
        "SELECT id, media_file_id, playlist_id
         FROM playlist_tracks
         WHERE playlist_id = ?
         ORDER BY CAST(id AS INTEGER), rowid",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let mut mf_ids: Vec<String> = rows
        .iter()
        .map(|row| row.get::<String, _>("media_file_id"))
        .collect();
    mf_ids.sort();
    mf_ids.dedup();

    let media_files: HashMap<String, MediaFile> = media_files::get_by_ids(pool, &mf_ids)
        .await?
        .into_iter()
        .map(|mf| (mf.id.clone(), mf))
        .collect();

    let mut tracks = PlaylistTracks::with_capacity(rows.len());
    for row in &rows {
        let media_file_id: String = row.get("media_file_id");
        let media_file = media_files
            .get(&media_file_id)
            .cloned()
            .unwrap_or_else(|| MediaFile::placeholder(media_file_id.clone()));
        tracks.push(PlaylistTrack {
            id: row.get("id"),
            media_file_id,
            playlist_id: row.get("playlist_id"),
            media_file,
        });
    }
    playlist.tracks = tracks;

    Ok(Some(playlist))
}

/// Get all playlists, honoring the sort/paging options.
pub async fn get_all(pool: &SqlitePool, options: QueryOptions) -> Result<Vec<Playlist>> {
    let sort = match options.sort.as_deref() {
        Some(column) if SORTABLE_COLUMNS.contains(&column) => column,
        Some(other) => {
            tracing::warn!(column = other, "ignoring unsortable playlist column");
            "name"
        }
        None => "name",
    };
    let direction = if options.descending { "desc" } else { "asc" };

    let mut sql = format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlist ORDER BY {sort} {direction}"
    );
    match (options.limit, options.offset) {
        (Some(_), Some(_)) => sql.push_str(" LIMIT ? OFFSET ?"),
        (Some(_), None) => sql.push_str(" LIMIT ?"),
        (None, Some(_)) => sql.push_str(" LIMIT -1 OFFSET ?"),
        (None, None) => {}
    }

    let mut query = sqlx::query(&sql);
    if let Some(limit) = options.limit {
        query = query.bind(limit);
    }
    if let Some(offset) = options.offset {
        query = query.bind(offset);
    }

    let rows = query.fetch_all(pool).await?;
    rows.iter().map(from_row).collect()
}

/// Find the playlist imported from the given file path.
pub async fn find_by_path(pool: &SqlitePool, path: &str) -> Result<Option<Playlist>> {
    let row = sqlx::query(&format!(
        "SELECT {PLAYLIST_COLUMNS} FROM playlist WHERE path = ? LIMIT 1"
    ))
    .bind(path)
    .fetch_optional(pool)
    .await?;

    row.map(|row| from_row(&row)).transpose()
}

/// Delete a playlist; its track rows go with it (cascade).
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM playlist WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Recompute the song count / duration / size aggregates from the stored
/// track rows, bumping `updated_at`.
pub async fn refresh_status(pool: &SqlitePool, playlist_id: &str) -> Result<()> {
    refresh_status_at(pool, playlist_id, Utc::now()).await
}

async fn refresh_status_at(
    pool: &SqlitePool,
    playlist_id: &str,
    updated_at: DateTime<Utc>,
) -> Result<()> {
    let row = sqlx::query(
        "SELECT COUNT(mf.id) as song_count,
                COALESCE(SUM(mf.duration), 0.0) as duration,
                CAST(COALESCE(SUM(mf.size), 0) AS INTEGER) as size
         FROM playlist_tracks pt
         LEFT JOIN media_file mf ON pt.media_file_id = mf.id
         WHERE pt.playlist_id = ?",
    )
    .bind(playlist_id)
    .fetch_one(pool)
    .await?;

    let song_count: i64 = row.get("song_count");
    let duration: f64 = row.get("duration");
    let size: i64 = row.get("size");

    sqlx::query(
        "UPDATE playlist SET song_count = ?, duration = ?, size = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(song_count)
    .bind(duration)
    .bind(size)
    .bind(format_timestamp(updated_at))
    .bind(playlist_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace the stored track rows from the in-memory list, keeping the
/// list's ids and order.
async fn update_tracks(pool: &SqlitePool, playlist_id: &str, tracks: &[PlaylistTrack]) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist_id)
        .execute(&mut *tx)
        .await?;

    for track in tracks {
        let mut track = track.clone();
        track.playlist_id = playlist_id.to_string();
        let args = to_sql_args(&track)?;
        let sql = insert_sql("playlist_tracks", &args);
        let mut query = sqlx::query(&sql);
        for (_, value) in &args {
            query = bind_value(query, value);
        }
        query.execute(&mut *tx).await?;
    }

    tx.commit().await?;
    Ok(())
}

fn from_row(row: &SqliteRow) -> Result<Playlist> {
    let rules = match row.get::<Option<String>, _>("rules") {
        Some(raw) if !raw.is_empty() => Some(serde_json::from_str(&raw)?),
        _ => None,
    };
    let evaluated_at = row
        .get::<Option<String>, _>("evaluated_at")
        .map(|raw| parse_timestamp(&raw))
        .transpose()?;

    Ok(Playlist {
        id: row.get("id"),
        name: row.get("name"),
        comment: row.get("comment"),
        duration: row.get::<f64, _>("duration") as f32,
        size: row.get("size"),
        song_count: row.get::<i64, _>("song_count") as i32,
        owner_name: String::new(),
        owner_id: row.get("owner_id"),
        public: row.get::<i64, _>("public") != 0,
        tracks: PlaylistTracks::new(),
        path: row.get("path"),
        sync: row.get::<i64, _>("sync") != 0,
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
        rules,
        evaluated_at,
    })
}
