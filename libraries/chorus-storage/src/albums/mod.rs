//! Album vertical slice.
//!
//! Albums are aggregates over their media files. `refresh` recomputes the
//! aggregate rows, resolving disagreeing MusicBrainz release ids by
//! majority vote and collapsing duplicated genre tags into a deduplicated
//! list.

use crate::error::Result;
use crate::genres;
use crate::metadata::{most_frequent_mbz_id, parse_genres};
use crate::sql::{bind_value, check, exists, insert_sql, parse_timestamp, to_sql_args, update_sql};
use chorus_core::types::Album;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// Recompute the album rows for the given ids from their media files.
///
/// Albums with no remaining media files are left untouched. Returns the
/// number of albums written.
pub async fn refresh(pool: &SqlitePool, album_ids: &[String]) -> Result<usize> {
    if album_ids.is_empty() {
        return Ok(0);
    }

    let placeholders = vec!["?"; album_ids.len()].join(", ");
    let sql = format!(
        "SELECT mf.album_id as id,
                MAX(mf.album) as name,
                MAX(mf.artist) as artist,
                MAX(mf.artist_id) as artist_id,
                MAX(mf.album_artist) as album_artist,
                COUNT(mf.id) as song_count,
                COALESCE(SUM(mf.duration), 0.0) as duration,
                CAST(COALESCE(SUM(mf.size), 0) AS INTEGER) as size,
                MIN(mf.year) as min_year,
                MAX(mf.year) as max_year,
                COALESCE(GROUP_CONCAT(mf.mbz_album_id, ' '), '') as mbz_album_ids,
                COALESCE(GROUP_CONCAT(mf.genre, ' '), '') as genres
         FROM media_file mf
         WHERE mf.album_id IN ({placeholders})
         GROUP BY mf.album_id"
    );
    let mut query = sqlx::query(&sql);
    for id in album_ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;

    let now = Utc::now();
    let mut written = 0;
    for row in &rows {
        let id: String = row.get("id");
        if id.is_empty() {
            // files not yet assigned to an album
            continue;
        }

        let existing = sqlx::query("SELECT mbz_album_id, created_at FROM album WHERE id = ?")
            .bind(&id)
            .fetch_optional(pool)
            .await?;
        let stored_mbz = existing
            .as_ref()
            .map(|row| row.get::<String, _>("mbz_album_id"))
            .unwrap_or_default();
        let created_at = existing
            .as_ref()
            .map(|row| parse_timestamp(&row.get::<String, _>("created_at")))
            .transpose()?
            .unwrap_or(now);

        let candidate_ids: String = row.get("mbz_album_ids");
        let mbz_album_id = most_frequent_mbz_id(&candidate_ids, &stored_mbz, "");

        let genre_list = parse_genres(&row.get::<String, _>("genres"));
        genres::put_all(pool, &genre_list).await?;
        let genre = genre_list.first().map(|g| g.id.clone()).unwrap_or_default();

        let album = Album {
            id: id.clone(),
            name: row.get("name"),
            artist: row.get("artist"),
            artist_id: row.get("artist_id"),
            album_artist: row.get("album_artist"),
            mbz_album_id,
            genre,
            song_count: row.get::<i64, _>("song_count") as i32,
            duration: row.get::<f64, _>("duration") as f32,
            size: row.get("size"),
            min_year: row.get::<i64, _>("min_year") as i32,
            max_year: row.get::<i64, _>("max_year") as i32,
            created_at,
            updated_at: now,
        };

        upsert(pool, &album).await?;
        written += 1;
    }

    tracing::debug!(requested = album_ids.len(), written, "refreshed albums");
    Ok(written)
}

/// Get an album by id.
pub async fn get(pool: &SqlitePool, id: &str) -> Result<Option<Album>> {
    let row = sqlx::query(
        "SELECT id, name, artist, artist_id, album_artist, mbz_album_id, genre,
                song_count, duration, size, min_year, max_year, created_at, updated_at
         FROM album WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(|row| {
        Ok(Album {
            id: row.get("id"),
            name: row.get("name"),
            artist: row.get("artist"),
            artist_id: row.get("artist_id"),
            album_artist: row.get("album_artist"),
            mbz_album_id: row.get("mbz_album_id"),
            genre: row.get("genre"),
            song_count: row.get::<i64, _>("song_count") as i32,
            duration: row.get::<f64, _>("duration") as f32,
            size: row.get("size"),
            min_year: row.get::<i64, _>("min_year") as i32,
            max_year: row.get::<i64, _>("max_year") as i32,
            created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
            updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
        })
    })
    .transpose()
}

async fn upsert(pool: &SqlitePool, album: &Album) -> Result<()> {
    let args = to_sql_args(album)?;
    let already = check(pool, &exists("album", [("id", album.id.as_str())])).await?;

    if already {
        let sql = update_sql("album", &args, "id");
        let mut query = sqlx::query(&sql);
        for (column, value) in &args {
            if column != "id" {
                query = bind_value(query, value);
            }
        }
        query = query.bind(album.id.clone());
        query.execute(pool).await?;
    } else {
        let sql = insert_sql("album", &args);
        let mut query = sqlx::query(&sql);
        for (_, value) in &args {
            query = bind_value(query, value);
        }
        query.execute(pool).await?;
    }

    Ok(())
}
