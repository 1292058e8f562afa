//! HTTP handlers for topshelf-ui
//!
//! One module per surface, each exporting a `*_routes()` router merged
//! in `build_router`.

pub mod health;
pub mod movies;
pub mod pages;
pub mod render;
pub mod songs;

pub use health::health_routes;
pub use movies::movies_routes;
pub use pages::menu_routes;
pub use songs::songs_routes;

use crate::AppState;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};

/// Render a page, consuming any pending flash message.
///
/// The builder receives the verified flash text (if any); when one was
/// present the response also clears the cookie so the banner shows once.
pub(crate) fn flash_page<F>(state: &AppState, headers: &HeaderMap, build: F) -> Response
where
    F: FnOnce(Option<&str>) -> String,
{
    let flash = crate::flash::take(headers, &state.secret_key);
    let html = build(flash.as_deref());
    match flash {
        Some(_) => (
            [(header::SET_COOKIE, crate::flash::clear_cookie())],
            Html(html),
        )
            .into_response(),
        None => Html(html).into_response(),
    }
}

/// Redirect while setting a flash message for the next page view
pub(crate) fn redirect_with_flash(state: &AppState, to: &str, message: &str) -> Response {
    (
        [(
            header::SET_COOKIE,
            crate::flash::set_cookie(&state.secret_key, message),
        )],
        Redirect::to(to),
    )
        .into_response()
}
