//! Genre vertical slice.

use crate::error::Result;
use chorus_core::types::{Genre, Genres};
use sqlx::{Row, SqlitePool};

/// Store the given genres, ignoring ones already present.
///
/// Parsed genres carry only their id; the name defaults to the id so the
/// row is presentable until a richer name is written.
pub async fn put_all(pool: &SqlitePool, genres: &[Genre]) -> Result<()> {
    for genre in genres {
        let name = if genre.name.is_empty() {
            genre.id.as_str()
        } else {
            genre.name.as_str()
        };
        sqlx::query(
            "INSERT INTO genre (id, name) VALUES (?, ?)
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(&genre.id)
        .bind(name)
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// Get all stored genres, ordered by id.
pub async fn get_all(pool: &SqlitePool) -> Result<Genres> {
    let rows = sqlx::query("SELECT id, name FROM genre ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Genre {
            id: row.get("id"),
            name: row.get("name"),
        })
        .collect())
}
