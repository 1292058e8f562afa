//! Catalogue record models and rank computation

use sqlx::FromRow;

/// Song record
///
/// `rating` is NULL until the user rates the song; the list view renders
/// a prompt for unrated records instead of storing a sentinel value.
#[derive(Debug, Clone, FromRow)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub year: i64,
    pub rating: Option<f64>,
    pub song_url: String,
    pub img_url: String,
    pub date_added: String,
}

/// Movie record
///
/// `year` is nullable: film metadata services may omit the release date.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: Option<i64>,
    pub description: String,
    pub rating: Option<f64>,
    pub review: Option<String>,
    pub img_url: String,
    pub imdb_link: String,
    pub date_added: String,
}

/// A record paired with its computed list rank
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    pub rank: i64,
    pub item: T,
}

/// Assign ranks to records already sorted ascending by rating.
///
/// Position `i` of `n` rows receives rank `n - i`: the lowest-rated record
/// ranks `n`, the highest-rated ranks 1. Ranks are a presentation value
/// computed on every listing and never persisted.
pub fn ranked<T>(items: Vec<T>) -> Vec<Ranked<T>> {
    let n = items.len() as i64;
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Ranked {
            rank: n - i as i64,
            item,
        })
        .collect()
}
