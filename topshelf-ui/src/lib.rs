//! topshelf-ui library interface
//!
//! Exposes AppState and the router builder for the binary and the
//! integration tests.

pub mod api;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod flash;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::clients::{FilmClient, VideoClient};

/// Application state shared across handlers
///
/// All dependencies are injected here at startup; handlers hold no
/// globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Video platform client (song search + detail)
    pub videos: Arc<VideoClient>,
    /// Film metadata client (movie search + detail)
    pub films: Arc<FilmClient>,
    /// Secret for signing flash cookies
    pub secret_key: String,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        videos: VideoClient,
        films: FilmClient,
        secret_key: String,
    ) -> Self {
        Self {
            db,
            videos: Arc::new(videos),
            films: Arc::new(films),
            secret_key,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::menu_routes())
        .merge(api::songs_routes())
        .merge(api::movies_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
