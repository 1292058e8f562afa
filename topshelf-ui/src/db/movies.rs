//! Movie table operations

use topshelf_common::models::Movie;
use topshelf_common::Result;

use sqlx::SqlitePool;

/// Fields required to insert a movie; id and date_added are generated
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i64>,
    pub description: String,
    pub img_url: String,
    pub imdb_link: String,
}

/// Insert a movie, returning the generated row id
pub async fn insert_movie(pool: &SqlitePool, movie: &NewMovie) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO movies (title, year, description, img_url, imdb_link)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&movie.title)
    .bind(movie.year)
    .bind(&movie.description)
    .bind(&movie.img_url)
    .bind(&movie.imdb_link)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load all movies ordered ascending by rating (NULL ratings first)
pub async fn list_movies_by_rating(pool: &SqlitePool) -> Result<Vec<Movie>> {
    let movies = sqlx::query_as::<_, Movie>(
        r#"
        SELECT id, title, year, description, rating, review, img_url, imdb_link, date_added
        FROM movies
        ORDER BY rating ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(movies)
}

/// Load one movie by id
pub async fn get_movie(pool: &SqlitePool, id: i64) -> Result<Option<Movie>> {
    let movie = sqlx::query_as::<_, Movie>(
        r#"
        SELECT id, title, year, description, rating, review, img_url, imdb_link, date_added
        FROM movies
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(movie)
}

/// Overwrite rating and review of one movie; returns false when the id is absent
pub async fn set_movie_rating(
    pool: &SqlitePool,
    id: i64,
    rating: f64,
    review: Option<&str>,
) -> Result<bool> {
    let result = sqlx::query("UPDATE movies SET rating = ?, review = ? WHERE id = ?")
        .bind(rating)
        .bind(review)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete one movie by id; returns false when the id is absent
pub async fn delete_movie(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM movies WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
