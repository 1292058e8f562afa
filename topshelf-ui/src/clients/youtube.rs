//! Video platform client (YouTube Data API v3)
//!
//! Two operations: keyword search (`/search`) and single-video detail
//! lookup (`/videos`). Results feed the song selection and ingestion
//! pages.
//!
//! # API Reference
//! - Search: https://www.googleapis.com/youtube/v3/search
//! - Detail: https://www.googleapis.com/youtube/v3/videos

use super::ClientError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Production API base URL
const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default timeout for video API requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of search results requested per query
const MAX_RESULTS: &str = "24";

/// Video platform client
pub struct VideoClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl VideoClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, YOUTUBE_API_URL.to_string())
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

    /// Search videos by keyword
    ///
    /// Returns the raw result list for user selection.
    pub async fn search(&self, keyword: &str) -> Result<Vec<VideoSearchItem>, ClientError> {
        debug!(keyword = %keyword, "Querying video search");

        let url = format!("{}/search", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", keyword),
                ("type", "video"),
                ("part", "snippet"),
                ("maxResults", MAX_RESULTS),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("video search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body: VideoSearchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("video search response: {}", e)))?;

        debug!(count = body.items.len(), "Video search complete");
        Ok(body.items)
    }

    /// Fetch the snippet for a single video id
    pub async fn video_detail(&self, video_id: &str) -> Result<VideoSnippet, ClientError> {
        debug!(video_id = %video_id, "Querying video detail");

        let url = format!("{}/videos", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("id", video_id),
                ("part", "snippet"),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("video detail request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        let body: VideoDetailResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("video detail response: {}", e)))?;

        body.items
            .into_iter()
            .next()
            .map(|item| item.snippet)
            .ok_or_else(|| ClientError::NotFound(format!("video id {}", video_id)))
    }
}

/// Canonical watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

// ============================================================================
// Video API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    items: Vec<VideoSearchItem>,
}

/// One entry of a video search response
#[derive(Debug, Clone, Deserialize)]
pub struct VideoSearchItem {
    pub id: VideoId,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
struct VideoDetailResponse {
    #[serde(default)]
    items: Vec<VideoDetailItem>,
}

#[derive(Debug, Deserialize)]
struct VideoDetailItem {
    snippet: VideoSnippet,
}

/// Video metadata used for ingestion and selection display
#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnails {
    pub high: Thumbnail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

impl VideoSnippet {
    /// Publication year, taken from the leading segment of the RFC 3339
    /// `publishedAt` timestamp
    pub fn published_year(&self) -> Option<i64> {
        self.published_at.split('-').next()?.parse().ok()
    }
}
