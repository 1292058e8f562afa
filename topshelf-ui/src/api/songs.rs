//! Song catalogue routes
//!
//! List, search, ingest, rate, update, delete. Search and ingestion go
//! through the video platform client; everything else is local CRUD.
//! Rate/update/delete key records by id.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{info, warn};

use topshelf_common::models::{ranked, Song};

use super::render::{escape_html, layout, rating_display};
use crate::clients::youtube::{watch_url, VideoSearchItem};
use crate::clients::ClientError;
use crate::db::songs::{self, NewSong};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Build song routes
pub fn songs_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", get(songs_page))
        .route("/songs/search", get(search_page).post(run_search))
        .route(
            "/songs/add-selected-song",
            get(add_selected_redirect).post(add_selected),
        )
        .route("/songs/rating", get(rate_page).post(apply_rating))
        .route("/songs/update", get(update_page).post(apply_update))
        .route("/songs/delete", get(delete).post(delete))
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    keyword: String,
}

#[derive(Debug, Deserialize)]
struct SelectForm {
    id: String,
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct RatingForm {
    id: i64,
    rating: f64,
}

/// GET /songs
///
/// Ranked song list, or the empty-state message. Ranks are computed for
/// this render only; nothing is written back.
async fn songs_page(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let all_songs = songs::list_songs_by_rating(&state.db).await?;

    Ok(super::flash_page(&state, &headers, |flash| {
        if all_songs.is_empty() {
            layout(
                "My Top Songs",
                "List empty! Please add a song.",
                flash,
                r#"<a class="button" href="/songs/search">Add a song</a>"#,
            )
        } else {
            layout(
                "My Top Songs",
                "My favourite tunes from the past 20 years.",
                flash,
                &song_table(all_songs),
            )
        }
    }))
}

fn song_table(all_songs: Vec<Song>) -> String {
    let mut rows = String::new();
    for entry in ranked(all_songs) {
        let song = entry.item;
        rows.push_str(&format!(
            r#"<tr>
                <td>{rank}</td>
                <td><img src="{img}" alt=""></td>
                <td><a href="{url}">{title}</a></td>
                <td>{year}</td>
                <td>{rating}</td>
                <td>
                    <a class="button" href="/songs/update?id={id}">Update</a>
                    <a class="button danger" href="/songs/delete?id={id}">Delete</a>
                </td>
            </tr>"#,
            rank = entry.rank,
            img = escape_html(&song.img_url),
            url = escape_html(&song.song_url),
            title = escape_html(&song.title),
            year = song.year,
            rating = rating_display(song.rating),
            id = song.id,
        ));
    }

    format!(
        r#"<table>
            <tr><th>Rank</th><th></th><th>Title</th><th>Year</th><th>Rating</th><th></th></tr>
            {rows}
        </table>
        <a class="button" href="/songs/search">Add a song</a>"#
    )
}

/// GET /songs/search
async fn search_page() -> Html<String> {
    Html(search_form(None))
}

fn search_form(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(r#"<div class="error-banner">{}</div>"#, escape_html(message)),
        None => String::new(),
    };

    let body = format!(
        r#"{banner}
        <form method="post" action="/songs/search">
            <label for="keyword">SEARCH BY ARTIST OR TRACK NAME</label>
            <input type="text" id="keyword" name="keyword" required>
            <button class="button" type="submit">SEARCH</button>
        </form>"#
    );

    layout("Song Search", "Find a song to add to your list.", None, &body)
}

/// POST /songs/search
///
/// Runs the external search. On failure the database is untouched and
/// the search form is re-rendered with an error banner.
async fn run_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> ApiResult<Response> {
    match state.videos.search(&form.keyword).await {
        Ok(items) => Ok(Html(select_song_page(&items)).into_response()),
        Err(err) => {
            warn!(keyword = %form.keyword, error = %err, "video search failed");
            Ok(Html(search_form(Some(
                "The video search service is unavailable right now. Please try again.",
            )))
            .into_response())
        }
    }
}

fn select_song_page(items: &[VideoSearchItem]) -> String {
    let mut cards = String::new();
    for item in items {
        let year = item
            .snippet
            .published_year()
            .map(|y| y.to_string())
            .unwrap_or_default();
        cards.push_str(&format!(
            r#"<div class="card">
                <img src="{img}" alt="">
                <h3>{title}</h3>
                <p class="subtitle">{channel} {year}</p>
                <form method="post" action="/songs/add-selected-song">
                    <input type="hidden" name="id" value="{id}">
                    <button class="button" type="submit">ADD SONG</button>
                </form>
            </div>"#,
            img = escape_html(&item.snippet.thumbnails.high.url),
            title = escape_html(&item.snippet.title),
            channel = escape_html(&item.snippet.channel_title),
            id = escape_html(&item.id.video_id),
        ));
    }

    let body = if cards.is_empty() {
        r#"<p>No results. Try another search.</p>
        <a class="button" href="/songs/search">Back to search</a>"#
            .to_string()
    } else {
        format!(r#"<div class="card-grid">{cards}</div>"#)
    };

    layout("Select a Song", "Pick the result to add.", None, &body)
}

/// GET /songs/add-selected-song
///
/// Selection only happens via POST from the results page.
async fn add_selected_redirect() -> Redirect {
    Redirect::to("/songs/search")
}

/// POST /songs/add-selected-song
///
/// Detail lookup for the chosen video, insert, then redirect to the
/// rating page for the new row.
async fn add_selected(
    State(state): State<AppState>,
    Form(form): Form<SelectForm>,
) -> ApiResult<Response> {
    let snippet = state.videos.video_detail(&form.id).await?;

    let year = snippet.published_year().ok_or_else(|| {
        ClientError::Parse(format!(
            "video {} has unparsable publication date {:?}",
            form.id, snippet.published_at
        ))
    })?;

    let new_song = NewSong {
        title: snippet.title.clone(),
        year,
        song_url: watch_url(&form.id),
        img_url: snippet.thumbnails.high.url.clone(),
    };
    let song_id = songs::insert_song(&state.db, &new_song).await?;
    info!(song_id, title = %new_song.title, "song added");

    Ok(super::redirect_with_flash(
        &state,
        &format!("/songs/rating?id={song_id}"),
        &format!(r#"New Song: "{}" added!"#, new_song.title),
    ))
}

/// GET /songs/rating
async fn rate_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> ApiResult<Response> {
    rating_form_page(&state, &headers, query.id, "/songs/rating").await
}

/// POST /songs/rating
async fn apply_rating(
    State(state): State<AppState>,
    Form(form): Form<RatingForm>,
) -> ApiResult<Response> {
    update_rating(&state, &form).await?;
    Ok(Redirect::to("/songs").into_response())
}

/// GET /songs/update
async fn update_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> ApiResult<Response> {
    rating_form_page(&state, &headers, query.id, "/songs/update").await
}

/// POST /songs/update
///
/// Same as rating, plus a confirmation flash.
async fn apply_update(
    State(state): State<AppState>,
    Form(form): Form<RatingForm>,
) -> ApiResult<Response> {
    let title = update_rating(&state, &form).await?;
    Ok(super::redirect_with_flash(
        &state,
        "/songs",
        &format!(r#""{title}" updated!"#),
    ))
}

/// Shared rating form for the rate and update routes.
///
/// Consumes a pending flash so the "added!" banner shows here after the
/// post-ingestion redirect.
async fn rating_form_page(
    state: &AppState,
    headers: &HeaderMap,
    id: i64,
    action: &str,
) -> ApiResult<Response> {
    let song = songs::get_song(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("song id {id}")))?;

    let body = format!(
        r#"<h2>{title}</h2>
        <p>Current rating: {current}</p>
        <form method="post" action="{action}">
            <input type="hidden" name="id" value="{id}">
            <label for="rating">RATING (0-10)</label>
            <input type="range" id="rating" name="rating" min="0" max="10" step="0.5" value="{slider}">
            <button class="button" type="submit">UPDATE</button>
        </form>"#,
        title = escape_html(&song.title),
        current = rating_display(song.rating),
        slider = song.rating.unwrap_or(5.0),
        id = song.id,
    );

    Ok(super::flash_page(state, headers, |flash| {
        layout("Rate Song", "Slide to rate.", flash, &body)
    }))
}

/// Apply a rating form to the database, returning the song title
async fn update_rating(state: &AppState, form: &RatingForm) -> ApiResult<String> {
    if !form.rating.is_finite() || !(0.0..=10.0).contains(&form.rating) {
        return Err(ApiError::BadRequest(format!(
            "rating must be between 0 and 10, got {}",
            form.rating
        )));
    }

    let song = songs::get_song(&state.db, form.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("song id {}", form.id)))?;

    songs::set_song_rating(&state.db, form.id, form.rating).await?;
    info!(song_id = form.id, rating = form.rating, "song rating updated");

    Ok(song.title)
}

/// GET/POST /songs/delete
async fn delete(State(state): State<AppState>, Query(query): Query<IdQuery>) -> ApiResult<Response> {
    let song = songs::get_song(&state.db, query.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("song id {}", query.id)))?;

    songs::delete_song(&state.db, query.id).await?;
    info!(song_id = query.id, title = %song.title, "song deleted");

    Ok(super::redirect_with_flash(
        &state,
        "/songs",
        &format!(r#""{}" deleted!"#, song.title),
    ))
}
