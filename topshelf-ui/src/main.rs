//! topshelf-ui - Personal media catalogue web service
//!
//! Serves the songs and movies catalogues as server-rendered pages,
//! backed by SQLite and two external catalog APIs.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use topshelf_ui::clients::{FilmClient, VideoClient};
use topshelf_ui::config::Config;
use topshelf_ui::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    info!("Starting topshelf-ui");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let db_path = config.database_path();
    info!("Database: {}", db_path.display());

    let db_pool = topshelf_common::db::init_database(&db_path).await?;
    info!("Database connection established");

    let state = AppState::new(
        db_pool,
        VideoClient::new(config.yt_api_key.clone()),
        FilmClient::new(config.tmdb_api_key.clone()),
        config.secret_key.clone(),
    );

    let app = topshelf_ui::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
