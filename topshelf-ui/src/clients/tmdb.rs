//! Film metadata client (TMDB)
//!
//! Two operations: title search (`/search/movie`) and movie detail
//! lookup (`/movie/{id}`). The detail payload carries the fields the
//! movie table persists: original title, release date, overview, poster
//! path, and the external identifier used for the IMDB link.
//!
//! # API Reference
//! - Search: https://api.themoviedb.org/3/search/movie
//! - Detail: https://api.themoviedb.org/3/movie/{id}

use super::ClientError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Production API base URL
const TMDB_API_URL: &str = "https://api.themoviedb.org/3";

/// Poster image base URL (original resolution)
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// IMDB title page base URL
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// Default timeout for film API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Film metadata client
pub struct FilmClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl FilmClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, TMDB_API_URL.to_string())
    }

    /// Create a client against an alternate endpoint (used by tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Search films by title
    pub async fn search(&self, title: &str) -> Result<Vec<FilmSearchItem>, ClientError> {
        debug!(title = %title, "Querying film search");

        let url = format!("{}/search/movie", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("film search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body: FilmSearchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("film search response: {}", e)))?;

        debug!(count = body.results.len(), "Film search complete");
        Ok(body.results)
    }

    /// Fetch full detail for a film id
    pub async fn detail(&self, film_id: i64) -> Result<FilmDetail, ClientError> {
        debug!(film_id, "Querying film detail");

        let url = format!("{}/movie/{}", self.base_url, film_id);
        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("film detail request failed: {}", e)))?;

        if response.status().as_u16() == 404 {
            return Err(ClientError::NotFound(format!("film id {}", film_id)));
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("film detail response: {}", e)))
    }
}

// ============================================================================
// Film API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct FilmSearchResponse {
    #[serde(default)]
    results: Vec<FilmSearchItem>,
}

/// One entry of a film search response
#[derive(Debug, Clone, Deserialize)]
pub struct FilmSearchItem {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// Film detail payload
#[derive(Debug, Clone, Deserialize)]
pub struct FilmDetail {
    pub original_title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl FilmDetail {
    /// Release year, taken from the leading segment of `release_date`
    pub fn release_year(&self) -> Option<i64> {
        self.release_date
            .as_deref()?
            .split('-')
            .next()?
            .parse()
            .ok()
    }

    /// Full-resolution poster URL, when the service provided a path
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", POSTER_BASE_URL, p))
    }

    /// IMDB title page URL, when the service provided an identifier
    pub fn imdb_url(&self) -> Option<String> {
        self.imdb_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}{}", IMDB_TITLE_URL, id))
    }
}
