//! Ingestion-path tests against a local fixture server
//!
//! Stands up a small axum app that answers with the external services'
//! response shapes, then drives the search and add-selected routes
//! end-to-end through the router.

use axum::{
    body::Body,
    extract::Path,
    http::{header, Request, StatusCode},
    routing::get,
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::util::ServiceExt;

use topshelf_ui::clients::{FilmClient, VideoClient};
use topshelf_ui::AppState;

/// Serve the fixture catalog APIs on an ephemeral port, returning the base URL
async fn spawn_fixture_server() -> String {
    async fn video_search() -> Json<serde_json::Value> {
        Json(json!({
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "abc123" },
                    "snippet": {
                        "title": "Fixture Song",
                        "publishedAt": "2018-06-01T12:00:00Z",
                        "channelTitle": "Fixture Channel",
                        "thumbnails": { "high": { "url": "https://img.example/high.jpg" } }
                    }
                }
            ]
        }))
    }

    async fn video_detail() -> Json<serde_json::Value> {
        Json(json!({
            "items": [
                {
                    "snippet": {
                        "title": "Fixture Song",
                        "publishedAt": "2018-06-01T12:00:00Z",
                        "channelTitle": "Fixture Channel",
                        "thumbnails": { "high": { "url": "https://img.example/high.jpg" } }
                    }
                }
            ]
        }))
    }

    async fn film_search() -> Json<serde_json::Value> {
        Json(json!({
            "page": 1,
            "results": [
                {
                    "id": 603,
                    "title": "Fixture Film",
                    "release_date": "1999-03-31",
                    "overview": "A fixture overview."
                }
            ]
        }))
    }

    async fn film_detail(Path(id): Path<i64>) -> Json<serde_json::Value> {
        Json(json!({
            "id": id,
            "original_title": "Fixture Film",
            "release_date": "1999-03-31",
            "overview": "A fixture overview.",
            "poster_path": "/poster.jpg",
            "imdb_id": "tt0133093"
        }))
    }

    let app = Router::new()
        .route("/search", get(video_search))
        .route("/videos", get(video_detail))
        .route("/search/movie", get(film_search))
        .route("/movie/:id", get(film_detail));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn create_test_app() -> (axum::Router, sqlx::SqlitePool) {
    let pool = sqlx::SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    topshelf_common::db::init::create_tables(&pool)
        .await
        .expect("Failed to initialize database schema");

    let base = spawn_fixture_server().await;
    let state = AppState::new(
        pool.clone(),
        VideoClient::with_base_url("test-key".into(), base.clone()),
        FilmClient::with_base_url("test-key".into(), base),
        "test-secret".to_string(),
    );

    (topshelf_ui::build_router(state), pool)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn song_search_renders_selection_page() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .oneshot(form_post("/songs/search", "keyword=fixture"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Fixture Song"));
    assert!(body.contains(r#"name="id" value="abc123""#));
}

#[tokio::test]
async fn adding_selected_song_creates_one_row_with_watch_url() {
    let (app, pool) = create_test_app().await;

    let response = app
        .oneshot(form_post("/songs/add-selected-song", "id=abc123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/songs/rating?id="));
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("topshelf_flash="));

    let songs = topshelf_ui::db::songs::list_songs_by_rating(&pool).await.unwrap();
    assert_eq!(songs.len(), 1, "exactly one new row");
    let song = &songs[0];
    assert_eq!(song.song_url, "https://www.youtube.com/watch?v=abc123");
    assert_eq!(song.title, "Fixture Song");
    assert_eq!(song.year, 2018);
    assert_eq!(song.img_url, "https://img.example/high.jpg");
    assert_eq!(song.rating, None);
}

#[tokio::test]
async fn movie_search_renders_selection_page() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .oneshot(form_post("/movies/movie-search", "title=fixture"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Fixture Film"));
    assert!(body.contains(r#"name="id" value="603""#));
}

#[tokio::test]
async fn adding_selected_movie_maps_detail_fields() {
    let (app, pool) = create_test_app().await;

    let response = app
        .oneshot(form_post("/movies/add-selected-movie", "id=603"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/movies/rate-review?id="));

    let movies = topshelf_ui::db::movies::list_movies_by_rating(&pool).await.unwrap();
    assert_eq!(movies.len(), 1);
    let movie = &movies[0];
    assert_eq!(movie.title, "Fixture Film");
    assert_eq!(movie.year, Some(1999));
    assert_eq!(movie.description, "A fixture overview.");
    assert_eq!(movie.img_url, "https://image.tmdb.org/t/p/original/poster.jpg");
    assert_eq!(movie.imdb_link, "https://www.imdb.com/title/tt0133093");
    assert_eq!(movie.rating, None);
    assert_eq!(movie.review, None);
}

#[tokio::test]
async fn redirect_after_add_points_at_an_existing_rating_page() {
    let (app, _pool) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(form_post("/songs/add-selected-song", "id=abc123"))
        .await
        .unwrap();
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();

    let followup = app
        .oneshot(Request::builder().uri(location).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(followup.status(), StatusCode::OK);

    let body = followup.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8_lossy(&body);
    assert!(body.contains("Fixture Song"));
    assert!(body.contains("Add your rating!"), "new song starts unrated");
}
