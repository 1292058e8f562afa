//! Song table operations

use topshelf_common::models::Song;
use topshelf_common::Result;

use sqlx::SqlitePool;

/// Fields required to insert a song; id and date_added are generated
#[derive(Debug, Clone)]
pub struct NewSong {
    pub title: String,
    pub year: i64,
    pub song_url: String,
    pub img_url: String,
}

/// Insert a song, returning the generated row id
pub async fn insert_song(pool: &SqlitePool, song: &NewSong) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO songs (title, year, song_url, img_url)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.song_url)
    .bind(&song.img_url)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load all songs ordered ascending by rating.
///
/// SQLite sorts NULL ratings first, so unrated songs lead the result.
/// This is the order the rank computation expects.
pub async fn list_songs_by_rating(pool: &SqlitePool) -> Result<Vec<Song>> {
    let songs = sqlx::query_as::<_, Song>(
        r#"
        SELECT id, title, year, rating, song_url, img_url, date_added
        FROM songs
        ORDER BY rating ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(songs)
}

/// Load one song by id
pub async fn get_song(pool: &SqlitePool, id: i64) -> Result<Option<Song>> {
    let song = sqlx::query_as::<_, Song>(
        r#"
        SELECT id, title, year, rating, song_url, img_url, date_added
        FROM songs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(song)
}

/// Overwrite the rating of one song; returns false when the id is absent
pub async fn set_song_rating(pool: &SqlitePool, id: i64, rating: f64) -> Result<bool> {
    let result = sqlx::query("UPDATE songs SET rating = ? WHERE id = ?")
        .bind(rating)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete one song by id; returns false when the id is absent
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
