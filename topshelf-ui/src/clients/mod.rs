//! External catalog API clients
//!
//! Thin typed wrappers over the two third-party services: a video
//! platform (search + video detail) and a film metadata service
//! (search + movie detail). Both are consumed for catalog lookup only.

pub mod tmdb;
pub mod youtube;

pub use tmdb::FilmClient;
pub use youtube::VideoClient;

use thiserror::Error;

/// Failure surfaced by an external catalog call
///
/// Handlers decide presentation: search routes re-render the search form
/// with an error banner; ingestion routes propagate as a 502 page.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the service
    #[error("service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The requested item does not exist upstream
    #[error("not found: {0}")]
    NotFound(String),
}
