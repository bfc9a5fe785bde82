// SPDX-License-Identifier: MPL-2.0
//! Remote video source port definition.
//!
//! This module defines the [`VideoSource`] trait for reading playlist pages
//! and video metadata from a video host. Infrastructure adapters (like the
//! YouTube Data API client) implement this trait.
//!
//! # Design Notes
//!
//! - Methods are `async`; callers await them from a tokio task
//! - A response-level API error is reported as [`FetchError::Api`], never
//!   as an empty success
//! - Uses domain types only (`VideoId`, `VideoMetadata`)

use crate::domain::video::{VideoId, VideoMetadata};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while talking to the video host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, timeout...).
    Network(String),

    /// The host answered with a non-success HTTP status.
    Status(u16),

    /// The host answered with an error payload.
    Api {
        /// Error code reported by the host.
        code: u16,
        /// Human-readable message reported by the host.
        message: String,
    },

    /// The response body did not have the expected shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Status(status) => write!(f, "HTTP status: {status}"),
            FetchError::Api { code, message } => write!(f, "API error {code}: {message}"),
            FetchError::Decode(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// PlaylistPage
// =============================================================================

/// One page of a remote playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    /// Video identifiers, in server order.
    pub video_ids: Vec<VideoId>,
    /// Continuation token for the following page, absent on the last page.
    pub next_page_token: Option<String>,
}

impl PlaylistPage {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}

// =============================================================================
// VideoSource Trait
// =============================================================================

/// Port for the remote video host.
///
/// # Errors
///
/// Both methods return a [`FetchError`] on transport failures, non-success
/// statuses, error payloads, or malformed responses. Callers decide how to
/// degrade; the vault loader treats every error as "zero results".
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetches title and thumbnail for a batch of videos.
    ///
    /// Unknown or private ids are simply absent from the returned map.
    async fn fetch_metadata(
        &self,
        ids: &[VideoId],
    ) -> Result<HashMap<VideoId, VideoMetadata>, FetchError>;

    /// Fetches one page of a playlist, starting at `page_token` when given.
    async fn fetch_playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, FetchError>;
}
