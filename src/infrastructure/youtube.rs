// SPDX-License-Identifier: MPL-2.0
//! YouTube Data API v3 adapter.
//!
//! Implements [`VideoSource`] on top of two endpoints:
//!
//! - `playlistItems?part=contentDetails&maxResults=50[&pageToken=...]`
//! - `videos?part=snippet&id=a,b,c`
//!
//! The API reports failures as an `error` object in the body, usually with
//! a non-success status. The body is always inspected for that object
//! before the status or the items are trusted.

use crate::application::port::video::{FetchError, PlaylistPage, VideoSource};
use crate::config::DEFAULT_YOUTUBE_API_BASE;
use crate::domain::video::{VideoId, VideoMetadata};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Page size requested from `playlistItems` (API maximum).
const PLAYLIST_PAGE_MAX_RESULTS: &str = "50";

const USER_AGENT: &str = concat!("FolioLens/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistItemsResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    fn best_url(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.fallback.as_ref())
            .map(|t| t.url.as_str())
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn check(status: u16, error: Option<ApiErrorBody>) -> Result<(), FetchError> {
    if let Some(error) = error {
        return Err(FetchError::Api {
            code: if error.code == 0 { status } else { error.code },
            message: error.message,
        });
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(())
}

/// Parses a `playlistItems` response body.
///
/// # Errors
///
/// Returns [`FetchError::Api`] when the body carries an `error` object,
/// [`FetchError::Status`] for other non-success statuses and
/// [`FetchError::Decode`] for malformed JSON.
pub fn parse_playlist_page(status: u16, body: &str) -> Result<PlaylistPage, FetchError> {
    let response: PlaylistItemsResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => return Err(FetchError::Status(status)),
        Err(err) => return Err(FetchError::Decode(err.to_string())),
    };
    check(status, response.error)?;

    let video_ids = response
        .items
        .into_iter()
        .filter_map(|item| item.content_details?.video_id)
        .filter(|id| !id.is_empty())
        .map(VideoId::new)
        .collect();
    Ok(PlaylistPage {
        video_ids,
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}

/// Parses a `videos` response body.
///
/// # Errors
///
/// Same as [`parse_playlist_page`].
pub fn parse_video_metadata(
    status: u16,
    body: &str,
) -> Result<HashMap<VideoId, VideoMetadata>, FetchError> {
    let response: VideosResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !(200..300).contains(&status) => return Err(FetchError::Status(status)),
        Err(err) => return Err(FetchError::Decode(err.to_string())),
    };
    check(status, response.error)?;

    Ok(response
        .items
        .into_iter()
        .filter_map(|item| {
            let snippet = item.snippet?;
            let thumbnail_url = snippet.thumbnails.best_url().unwrap_or_default().to_string();
            Some((
                VideoId::new(item.id),
                VideoMetadata {
                    title: snippet.title,
                    thumbnail_url,
                },
            ))
        })
        .collect())
}

// =============================================================================
// Client
// =============================================================================

/// [`VideoSource`] backed by the YouTube Data API.
#[derive(Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a client for the public API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_YOUTUBE_API_BASE.to_string(),
        })
    }

    /// Points the client at another API root (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<(u16, String), FetchError> {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;
        Ok((status, body))
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn fetch_metadata(
        &self,
        ids: &[VideoId],
    ) -> Result<HashMap<VideoId, VideoMetadata>, FetchError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let joined = ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let (status, body) = self
            .get("videos", &[("part", "snippet"), ("id", joined.as_str())])
            .await?;
        parse_video_metadata(status, &body)
    }

    async fn fetch_playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, FetchError> {
        let mut query = vec![
            ("part", "contentDetails"),
            ("maxResults", PLAYLIST_PAGE_MAX_RESULTS),
            ("playlistId", playlist_id),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }
        let (status, body) = self.get("playlistItems", &query).await?;
        parse_playlist_page(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_page_extracts_ids_and_token() {
        let body = r#"{
            "nextPageToken": "CAUQAA",
            "items": [
                {"contentDetails": {"videoId": "abc"}},
                {"contentDetails": {}},
                {"contentDetails": {"videoId": "def"}}
            ]
        }"#;
        let page = parse_playlist_page(200, body).expect("valid page");
        assert_eq!(page.video_ids, vec![VideoId::new("abc"), VideoId::new("def")]);
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
    }

    #[test]
    fn last_page_has_no_token() {
        let page = parse_playlist_page(200, r#"{"items": []}"#).expect("valid page");
        assert!(page.is_last());
        assert!(page.video_ids.is_empty());
    }

    #[test]
    fn error_object_is_reported_even_with_success_status() {
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded"}}"#;
        assert_eq!(
            parse_playlist_page(200, body),
            Err(FetchError::Api {
                code: 403,
                message: "quotaExceeded".to_string()
            })
        );
    }

    #[test]
    fn non_json_error_status_maps_to_status() {
        assert_eq!(
            parse_video_metadata(502, "<html>Bad Gateway</html>"),
            Err(FetchError::Status(502))
        );
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        assert!(matches!(
            parse_video_metadata(200, "{"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn metadata_prefers_high_thumbnail() {
        let body = r#"{"items": [
            {"id": "abc", "snippet": {"title": "Studio take", "thumbnails": {
                "default": {"url": "d.jpg"},
                "high": {"url": "h.jpg"}
            }}},
            {"id": "nosnippet"}
        ]}"#;
        let metadata = parse_video_metadata(200, body).expect("valid body");
        assert_eq!(metadata.len(), 1);
        let meta = &metadata[&VideoId::new("abc")];
        assert_eq!(meta.title, "Studio take");
        assert_eq!(meta.thumbnail_url, "h.jpg");
    }
}
