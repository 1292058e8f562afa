//! Menu landing page

use super::render;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::AppState;

/// GET /
///
/// Landing page linking to the two catalogues
pub async fn menu_page() -> impl IntoResponse {
    let body = r#"
        <div class="card-grid">
            <div class="card">
                <h2>Songs</h2>
                <p>Search the video catalog, save your favourite tracks, and keep a ranked list.</p>
                <a class="button" href="/songs">My Top Songs</a>
            </div>
            <div class="card">
                <h2>Movies</h2>
                <p>Search the film catalog, rate and review what you watched, and keep a ranked list.</p>
                <a class="button" href="/movies">My Top Movies</a>
            </div>
        </div>
    "#;

    Html(render::layout(
        "Topshelf",
        "Your personal media catalogue.",
        None,
        body,
    ))
}

/// Build menu routes
pub fn menu_routes() -> Router<AppState> {
    Router::new().route("/", get(menu_page))
}
