//! Movie catalogue routes
//!
//! Mirrors the song surface with a review field on top of the rating,
//! backed by the film metadata client.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{info, warn};

use topshelf_common::models::{ranked, Movie};

use super::render::{escape_html, layout, rating_display};
use crate::clients::tmdb::FilmSearchItem;
use crate::clients::ClientError;
use crate::db::movies::{self, NewMovie};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Build movie routes
pub fn movies_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies_page))
        .route("/movies/movie-search", get(search_page).post(run_search))
        .route(
            "/movies/add-selected-movie",
            get(add_selected_redirect).post(add_selected),
        )
        .route("/movies/rate-review", get(rate_page).post(apply_rating))
        .route("/movies/update", get(update_page).post(apply_update))
        .route("/movies/delete", get(delete))
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SelectForm {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct RatingReviewForm {
    id: i64,
    rating: f64,
    #[serde(default)]
    review: String,
}

/// GET /movies
///
/// Ranked movie list, or the empty-state message.
async fn movies_page(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Response> {
    let all_movies = movies::list_movies_by_rating(&state.db).await?;

    Ok(super::flash_page(&state, &headers, |flash| {
        if all_movies.is_empty() {
            layout(
                "My Top Movies",
                "List empty! Please add a movie.",
                flash,
                r#"<a class="button" href="/movies/movie-search">Add a movie</a>"#,
            )
        } else {
            layout(
                "My Top Movies",
                "These are my all time favourite movies.",
                flash,
                &movie_table(all_movies),
            )
        }
    }))
}

fn movie_table(all_movies: Vec<Movie>) -> String {
    let mut rows = String::new();
    for entry in ranked(all_movies) {
        let movie = entry.item;
        let review = movie
            .review
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| "Add your review!".to_string());
        rows.push_str(&format!(
            r#"<tr>
                <td>{rank}</td>
                <td><img src="{img}" alt=""></td>
                <td><a href="{imdb}">{title}</a></td>
                <td>{year}</td>
                <td>{rating}</td>
                <td>{review}</td>
                <td>
                    <a class="button" href="/movies/update?id={id}">Update</a>
                    <a class="button danger" href="/movies/delete?id={id}">Delete</a>
                </td>
            </tr>"#,
            rank = entry.rank,
            img = escape_html(&movie.img_url),
            imdb = escape_html(&movie.imdb_link),
            title = escape_html(&movie.title),
            year = movie.year.map(|y| y.to_string()).unwrap_or_default(),
            rating = rating_display(movie.rating),
            id = movie.id,
        ));
    }

    format!(
        r#"<table>
            <tr><th>Rank</th><th></th><th>Title</th><th>Year</th><th>Rating</th><th>Review</th><th></th></tr>
            {rows}
        </table>
        <a class="button" href="/movies/movie-search">Add a movie</a>"#
    )
}

/// GET /movies/movie-search
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
        <form method="post" action="/movies/movie-search">
            <label for="title">SEARCH BY TITLE</label>
            <input type="text" id="title" name="title" required>
            <button class="button" type="submit">SEARCH</button>
        </form>"#
    );

    layout("Movie Search", "Find a movie to add to your list.", None, &body)
}

/// POST /movies/movie-search
///
/// Runs the external search. On failure the database is untouched and
/// the search form is re-rendered with an error banner.
async fn run_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> ApiResult<Response> {
    match state.films.search(&form.title).await {
        Ok(results) => Ok(Html(select_movie_page(&results)).into_response()),
        Err(err) => {
            warn!(title = %form.title, error = %err, "film search failed");
            Ok(Html(search_form(Some(
                "The film search service is unavailable right now. Please try again.",
            )))
            .into_response())
        }
    }
}

fn select_movie_page(results: &[FilmSearchItem]) -> String {
    let mut cards = String::new();
    for film in results {
        let year = film
            .release_date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .unwrap_or_default();
        cards.push_str(&format!(
            r#"<div class="card">
                <h3>{title} {year}</h3>
                <p>{overview}</p>
                <form method="post" action="/movies/add-selected-movie">
                    <input type="hidden" name="id" value="{id}">
                    <button class="button" type="submit">ADD MOVIE</button>
                </form>
            </div>"#,
            title = escape_html(&film.title),
            overview = escape_html(&film.overview),
            id = film.id,
        ));
    }

    let body = if cards.is_empty() {
        r#"<p>No results. Try another search.</p>
        <a class="button" href="/movies/movie-search">Back to search</a>"#
            .to_string()
    } else {
        format!(r#"<div class="card-grid">{cards}</div>"#)
    };

    layout("Select a Movie", "Pick the result to add.", None, &body)
}

/// GET /movies/add-selected-movie
async fn add_selected_redirect() -> Redirect {
    Redirect::to("/movies/movie-search")
}

/// POST /movies/add-selected-movie
///
/// Detail lookup for the chosen film, insert, then redirect to the
/// rate-review page for the new row.
async fn add_selected(
    State(state): State<AppState>,
    Form(form): Form<SelectForm>,
) -> ApiResult<Response> {
    let detail = state.films.detail(form.id).await?;

    let img_url = detail.poster_url().ok_or_else(|| {
        ClientError::Parse(format!("film {} detail payload has no poster path", form.id))
    })?;
    let imdb_link = detail.imdb_url().ok_or_else(|| {
        ClientError::Parse(format!("film {} detail payload has no IMDB id", form.id))
    })?;

    let new_movie = NewMovie {
        title: detail.original_title.clone(),
        year: detail.release_year(),
        description: detail.overview.clone(),
        img_url,
        imdb_link,
    };
    let movie_id = movies::insert_movie(&state.db, &new_movie).await?;
    info!(movie_id, title = %new_movie.title, "movie added");

    Ok(super::redirect_with_flash(
        &state,
        &format!("/movies/rate-review?id={movie_id}"),
        &format!(r#"New Movie: "{}" added!"#, new_movie.title),
    ))
}

/// GET /movies/rate-review
async fn rate_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> ApiResult<Response> {
    rating_form_page(&state, &headers, query.id, "/movies/rate-review").await
}

/// POST /movies/rate-review
async fn apply_rating(
    State(state): State<AppState>,
    Form(form): Form<RatingReviewForm>,
) -> ApiResult<Response> {
    update_rating_review(&state, &form).await?;
    Ok(Redirect::to("/movies").into_response())
}

/// GET /movies/update
async fn update_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IdQuery>,
) -> ApiResult<Response> {
    rating_form_page(&state, &headers, query.id, "/movies/update").await
}

/// POST /movies/update
///
/// Same as rate-review, plus a confirmation flash.
async fn apply_update(
    State(state): State<AppState>,
    Form(form): Form<RatingReviewForm>,
) -> ApiResult<Response> {
    let title = update_rating_review(&state, &form).await?;
    Ok(super::redirect_with_flash(
        &state,
        "/movies",
        &format!(r#""{title}" updated!"#),
    ))
}

/// Shared rating + review form for the rate-review and update routes.
///
/// Consumes a pending flash so the "added!" banner shows here after the
/// post-ingestion redirect.
async fn rating_form_page(
    state: &AppState,
    headers: &HeaderMap,
    id: i64,
    action: &str,
) -> ApiResult<Response> {
    let movie = movies::get_movie(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("movie id {id}")))?;

    let body = format!(
        r#"<h2>{title}</h2>
        <p>Current rating: {current}</p>
        <form method="post" action="{action}">
            <input type="hidden" name="id" value="{id}">
            <label for="rating">RATING (0-10)</label>
            <input type="range" id="rating" name="rating" min="0" max="10" step="0.5" value="{slider}">
            <label for="review">REVIEW</label>
            <textarea id="review" name="review" rows="4">{review}</textarea>
            <button class="button" type="submit">UPDATE</button>
        </form>"#,
        title = escape_html(&movie.title),
        current = rating_display(movie.rating),
        slider = movie.rating.unwrap_or(5.0),
        review = escape_html(movie.review.as_deref().unwrap_or_default()),
        id = movie.id,
    );

    Ok(super::flash_page(state, headers, |flash| {
        layout("Rate Movie", "Rate and review.", flash, &body)
    }))
}

/// Apply a rating + review form to the database, returning the movie title
async fn update_rating_review(state: &AppState, form: &RatingReviewForm) -> ApiResult<String> {
    if !form.rating.is_finite() || !(0.0..=10.0).contains(&form.rating) {
        return Err(ApiError::BadRequest(format!(
            "rating must be between 0 and 10, got {}",
            form.rating
        )));
    }

    let movie = movies::get_movie(&state.db, form.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("movie id {}", form.id)))?;

    // An empty textarea keeps the review unset rather than storing ""
    let review = Some(form.review.trim()).filter(|r| !r.is_empty());
    movies::set_movie_rating(&state.db, form.id, form.rating, review).await?;
    info!(movie_id = form.id, rating = form.rating, "movie rating updated");

    Ok(movie.title)
}

/// GET /movies/delete
async fn delete(State(state): State<AppState>, Query(query): Query<IdQuery>) -> ApiResult<Response> {
    let movie = movies::get_movie(&state.db, query.id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("movie id {}", query.id)))?;

    movies::delete_movie(&state.db, query.id).await?;
    info!(movie_id = query.id, title = %movie.title, "movie deleted");

    Ok(super::redirect_with_flash(
        &state,
        "/movies",
        &format!(r#""{}" deleted!"#, movie.title),
    ))
}
