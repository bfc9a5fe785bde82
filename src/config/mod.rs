// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery configuration stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Log filter
//! - `[gallery]` - Filter categories and masonry layout options
//! - `[lightbox]` - Swipe threshold
//! - `[modal]` - Close transition duration
//! - `[vault]` - YouTube API key, paging and the video lists
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `FOLIO_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gallery.categories.push("Logos".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::application::loader::PlaylistSource;
use crate::application::port::layout::LayoutOptions;
use crate::domain::media::Category;
use crate::domain::ui::{PageCap, PageSize, SwipeThreshold, TransitionDuration};
use crate::domain::video::{VideoId, VideoType};
use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the file exists but cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Filter categories, in chip order.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Horizontal gap between masonry columns, in pixels.
    #[serde(default = "default_gutter_px", skip_serializing_if = "Option::is_none")]
    pub gutter_px: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_selector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_width_selector: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            gutter_px: default_gutter_px(),
            item_selector: None,
            column_width_selector: None,
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn declared_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(Category::new)
            .collect()
    }

    /// Layout options with defaults filled in and the gutter clamped.
    #[must_use]
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            item_selector: self
                .item_selector
                .clone()
                .unwrap_or_else(|| DEFAULT_ITEM_SELECTOR.to_string()),
            column_width_selector: self
                .column_width_selector
                .clone()
                .unwrap_or_else(|| DEFAULT_COLUMN_WIDTH_SELECTOR.to_string()),
            gutter_px: self
                .gutter_px
                .unwrap_or(DEFAULT_GUTTER_PX)
                .min(MAX_GUTTER_PX),
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Swipe power needed to change slide.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        SwipeThreshold::new(self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD))
    }
}

/// Modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModalConfig {
    /// Close transition duration, in milliseconds (200 to 300).
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
        }
    }
}

impl ModalConfig {
    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        TransitionDuration::from_millis(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }
}

/// A video referenced by the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoRef {
    pub id: String,
    #[serde(
        rename = "type",
        serialize_with = "serialize_video_type",
        deserialize_with = "deserialize_video_type"
    )]
    pub video_type: VideoType,
}

/// A playlist referenced by the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistRef {
    pub id: String,
    #[serde(
        rename = "type",
        serialize_with = "serialize_video_type",
        deserialize_with = "deserialize_video_type"
    )]
    pub video_type: VideoType,
}

/// Video vault settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VaultConfig {
    /// YouTube Data API key. Without it the vault shows static entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Videos revealed per "load more" step.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Playlist pages followed before giving up.
    #[serde(
        default = "default_max_playlist_pages",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_playlist_pages: Option<usize>,

    /// Fixed shuffle seed, for reproducible ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,

    /// Videos always listed first, in this order.
    #[serde(default)]
    pub static_videos: Vec<VideoRef>,

    /// Playlists appended after the static videos, in this order.
    #[serde(default)]
    pub playlists: Vec<PlaylistRef>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            page_size: default_page_size(),
            max_playlist_pages: default_max_playlist_pages(),
            shuffle_seed: None,
            static_videos: Vec::new(),
            playlists: Vec::new(),
        }
    }
}

impl VaultConfig {
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::new(self.page_size.unwrap_or(DEFAULT_VAULT_PAGE_SIZE))
    }

    #[must_use]
    pub fn page_cap(&self) -> PageCap {
        PageCap::new(self.max_playlist_pages.unwrap_or(DEFAULT_MAX_PLAYLIST_PAGES))
    }

    /// Configured API key, ignoring blank values.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Static videos in declaration order, skipping blank ids.
    pub fn static_videos(&self) -> impl Iterator<Item = (VideoId, VideoType)> + '_ {
        self.static_videos
            .iter()
            .map(|v| (v.id.trim(), v.video_type))
            .filter(|(id, _)| !id.is_empty())
            .map(|(id, video_type)| (VideoId::new(id), video_type))
    }

    /// Playlists in declaration order, skipping blank ids.
    #[must_use]
    pub fn playlist_sources(&self) -> Vec<PlaylistSource> {
        self.playlists
            .iter()
            .map(|p| (p.id.trim(), p.video_type))
            .filter(|(id, _)| !id.is_empty())
            .map(|(id, video_type)| PlaylistSource::new(id, video_type))
            .collect()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub modal: ModalConfig,

    #[serde(default)]
    pub vault: VaultConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gutter_px() -> Option<u32> {
    Some(DEFAULT_GUTTER_PX)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_VAULT_PAGE_SIZE)
}

fn default_max_playlist_pages() -> Option<usize> {
    Some(DEFAULT_MAX_PLAYLIST_PAGES)
}

fn serialize_video_type<S>(value: &VideoType, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.slug())
}

fn deserialize_video_type<'de, D>(deserializer: D) -> std::result::Result<VideoType, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<VideoType>()
        .map_err(|err| D::Error::custom(err.to_string()))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with [`LOAD_ERROR_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                log_level: Some("folio_lens=debug".to_string()),
            },
            gallery: GalleryConfig {
                categories: vec!["Landing".to_string(), "Vectors".to_string()],
                gutter_px: Some(24),
                ..GalleryConfig::default()
            },
            vault: VaultConfig {
                api_key: Some("key".to_string()),
                shuffle_seed: Some(7),
                static_videos: vec![VideoRef {
                    id: "dQw4w9WgXcQ".to_string(),
                    video_type: VideoType::MusicVideo,
                }],
                playlists: vec![PlaylistRef {
                    id: "PL123".to_string(),
                    video_type: VideoType::LivePerformance,
                }],
                ..VaultConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn parses_hand_written_file() {
        let content = r#"
            [gallery]
            categories = ["Landing", "Vectors", "Mockups", "Logos"]

            [modal]
            transition_ms = 900

            [vault]
            page_size = 6

            [[vault.static_videos]]
            id = "abc"
            type = "studio_session"

            [[vault.playlists]]
            id = "PLxyz"
            type = "Music-Video"
        "#;
        let config: Config = toml::from_str(content).expect("valid config");

        assert_eq!(config.gallery.declared_categories().len(), 4);
        assert_eq!(config.modal.transition().as_millis(), 300);
        assert_eq!(config.vault.page_size().value(), 6);
        assert_eq!(
            config.vault.static_videos().collect::<Vec<_>>(),
            vec![(VideoId::new("abc"), VideoType::StudioSession)]
        );
        assert_eq!(
            config.vault.playlist_sources(),
            vec![PlaylistSource::new("PLxyz", VideoType::MusicVideo)]
        );
        assert_eq!(config.lightbox.swipe_threshold(), SwipeThreshold::default());
    }

    #[test]
    fn unknown_video_type_is_rejected() {
        let content = r#"
            [[vault.playlists]]
            id = "PLxyz"
            type = "podcast"
        "#;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[vault\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_layout_options_match_constants() {
        let options = GalleryConfig::default().layout_options();
        assert_eq!(options, LayoutOptions::default());
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let vault = VaultConfig {
            api_key: Some("   ".to_string()),
            ..VaultConfig::default()
        };
        assert_eq!(vault.api_key(), None);
    }

    #[test]
    fn blank_video_and_playlist_ids_are_skipped() {
        let content = r#"
            [[vault.static_videos]]
            id = ""
            type = "music-video"

            [[vault.static_videos]]
            id = " abc "
            type = "music-video"

            [[vault.playlists]]
            id = "   "
            type = "live-performance"

            [[vault.playlists]]
            id = "PLxyz"
            type = "live-performance"
        "#;
        let config: Config = toml::from_str(content).expect("valid config");

        assert_eq!(
            config.vault.static_videos().collect::<Vec<_>>(),
            vec![(VideoId::new("abc"), VideoType::MusicVideo)]
        );
        assert_eq!(
            config.vault.playlist_sources(),
            vec![PlaylistSource::new("PLxyz", VideoType::LivePerformance)]
        );
    }
}
