// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;

/// Stable identifier of a media entry, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    /// Creates a new identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Filter category attached to a media entry (e.g. "Dashboards", "Vectors").
///
/// Categories compare case-sensitively, matching the labels declared
/// for the gallery's filter chips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Discriminates how a media entry is presented when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image shown in the lightbox.
    Image,
    /// Video played in the video modal.
    Video {
        /// Provider-side video identifier, when the asset is hosted remotely.
        provider_id: Option<String>,
    },
}

impl MediaKind {
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, MediaKind::Image)
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video { .. })
    }
}

/// A single item of a gallery catalog.
///
/// Entries are built once by the catalog builder; `order` records the
/// insertion position and is never reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    id: MediaId,
    kind: MediaKind,
    source_url: String,
    thumbnail_url: Option<String>,
    category: Option<Category>,
    caption: String,
    order: usize,
}

impl MediaEntry {
    /// Creates an entry. Used by the catalog builder, which owns ordering.
    #[must_use]
    pub(crate) fn new(
        id: MediaId,
        kind: MediaKind,
        source_url: String,
        thumbnail_url: Option<String>,
        category: Option<Category>,
        caption: String,
        order: usize,
    ) -> Self {
        Self {
            id,
            kind,
            source_url,
            thumbnail_url,
            category,
            caption,
            order,
        }
    }

    #[must_use]
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> &MediaKind {
        &self.kind
    }

    /// Full-resolution asset URL.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Thumbnail URL, falling back to the full-resolution source.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.source_url)
    }

    /// Primary category used for filtering, if any.
    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Display string, also used as the lightbox caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Insertion position within the catalog.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}
