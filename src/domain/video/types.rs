// SPDX-License-Identifier: MPL-2.0
//! Video catalog domain types.

use std::fmt;
use std::str::FromStr;

/// Title shown until remote metadata for a video resolves.
pub const PLACEHOLDER_TITLE: &str = "Loading...";

/// Opaque identifier assigned by the video host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic thumbnail URL served by the host's image CDN.
    ///
    /// Available without any API call, so it doubles as the placeholder
    /// thumbnail before metadata resolves.
    #[must_use]
    pub fn placeholder_thumbnail(&self) -> String {
        format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", self.0)
    }

    /// Public watch URL for the video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Kind of video, used by the vault's type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VideoType {
    MusicVideo,
    StudioSession,
    LivePerformance,
}

impl VideoType {
    /// Every variant, in chip display order.
    pub const ALL: [VideoType; 3] = [
        VideoType::MusicVideo,
        VideoType::StudioSession,
        VideoType::LivePerformance,
    ];

    /// Kebab-case slug used in configuration files and on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            VideoType::MusicVideo => "music-video",
            VideoType::StudioSession => "studio-session",
            VideoType::LivePerformance => "live-performance",
        }
    }
}

impl fmt::Display for VideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

/// Error returned when a string names no known [`VideoType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVideoType(pub String);

impl fmt::Display for UnknownVideoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown video type: {}", self.0)
    }
}

impl std::error::Error for UnknownVideoType {}

impl FromStr for VideoType {
    type Err = UnknownVideoType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        VideoType::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| UnknownVideoType(s.to_string()))
    }
}

/// Metadata returned by the host for one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: String,
}

/// Where a vault entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// Listed in the static configuration.
    Static,
    /// Retrieved from the playlist at this position in the configuration.
    Playlist(usize),
}

/// A video shown in the vault grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCatalogEntry {
    video_id: VideoId,
    video_type: VideoType,
    origin: EntryOrigin,
    title: String,
    thumbnail_url: String,
    resolved: bool,
}

impl VideoCatalogEntry {
    /// Creates an entry showing placeholder title and thumbnail.
    #[must_use]
    pub fn placeholder(video_id: VideoId, video_type: VideoType, origin: EntryOrigin) -> Self {
        let thumbnail_url = video_id.placeholder_thumbnail();
        Self {
            video_id,
            video_type,
            origin,
            title: PLACEHOLDER_TITLE.to_string(),
            thumbnail_url,
            resolved: false,
        }
    }

    /// Replaces the placeholders with fetched metadata.
    pub fn resolve(&mut self, metadata: &VideoMetadata) {
        self.title.clone_from(&metadata.title);
        if !metadata.thumbnail_url.is_empty() {
            self.thumbnail_url.clone_from(&metadata.thumbnail_url);
        }
        self.resolved = true;
    }

    #[must_use]
    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    #[must_use]
    pub fn video_type(&self) -> VideoType {
        self.video_type
    }

    #[must_use]
    pub fn origin(&self) -> EntryOrigin {
        self.origin
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    /// Returns `true` once remote metadata has been applied.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self.origin, EntryOrigin::Static)
    }
}
