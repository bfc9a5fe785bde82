// SPDX-License-Identifier: MPL-2.0
//! Static media catalog stored as TOML.
//!
//! ```toml
//! categories = ["Landing", "Vectors"]
//!
//! [[media]]
//! id = "hero"
//! src = "images/hero.jpg"
//! thumbnail = "images/hero_small.jpg"
//! tags = ["Landing"]
//! caption = "Hero banner"
//!
//! [[media]]
//! id = "reel"
//! kind = "video"
//! provider_id = "dQw4w9WgXcQ"
//! src = "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
//! tags = ["Vectors"]
//! ```
//!
//! Categories listed in the file come first; categories from the settings
//! file are appended after them.

use crate::application::query::catalog::{CatalogBuilder, MediaCatalog, MediaSpec};
use crate::domain::media::{Category, MediaKind};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum KindRecord {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Deserialize)]
struct MediaRecord {
    id: String,
    src: String,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    kind: KindRecord,
    #[serde(default)]
    provider_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    media: Vec<MediaRecord>,
}

impl From<MediaRecord> for MediaSpec {
    fn from(record: MediaRecord) -> Self {
        let kind = match record.kind {
            KindRecord::Image => MediaKind::Image,
            KindRecord::Video => MediaKind::Video {
                provider_id: record.provider_id,
            },
        };
        MediaSpec {
            id: record.id,
            kind,
            source_url: record.src,
            thumbnail_url: record.thumbnail.filter(|t| !t.trim().is_empty()),
            tags: record.tags,
            caption: record.caption,
        }
    }
}

/// Parses catalog TOML, adding `extra_categories` after the file's own.
///
/// # Errors
///
/// Returns a config error for invalid TOML and a catalog error for blank
/// or duplicate ids.
pub fn parse_catalog(
    content: &str,
    extra_categories: impl IntoIterator<Item = Category>,
) -> Result<MediaCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    let categories = file
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(Category::new)
        .chain(extra_categories);

    let mut builder = CatalogBuilder::new(categories);
    builder.extend(file.media.into_iter().map(MediaSpec::from))?;
    Ok(builder.build())
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise see
/// [`parse_catalog`].
pub fn load_catalog(
    path: &Path,
    extra_categories: impl IntoIterator<Item = Category>,
) -> Result<MediaCatalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse_catalog(&content, extra_categories)?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}
