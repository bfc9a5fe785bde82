// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used when a setting is missing from `settings.toml`.
//!
//! # Categories
//!
//! - **Logging**: Default log filter
//! - **Gallery**: Masonry layout selectors and gutter
//! - **Lightbox**: Swipe commit threshold
//! - **Modal**: Close transition duration
//! - **Vault**: Paging, playlist page cap

use crate::domain::ui::newtypes::{
    page_cap_bounds, page_size_bounds, swipe_bounds, transition_bounds,
};

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Selector matching every grid item.
pub const DEFAULT_ITEM_SELECTOR: &str = ".gallery-item";

/// Selector of the element defining one column width.
pub const DEFAULT_COLUMN_WIDTH_SELECTOR: &str = ".gallery-sizer";

/// Default horizontal gap between columns, in pixels.
pub const DEFAULT_GUTTER_PX: u32 = 16;

/// Largest accepted gutter, in pixels.
pub const MAX_GUTTER_PX: u32 = 128;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Default swipe power (`|offset| * velocity`) needed to change slide.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = swipe_bounds::DEFAULT;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Default modal close transition, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = transition_bounds::DEFAULT_MS;

// ==========================================================================
// Vault Defaults
// ==========================================================================

/// Videos revealed per "load more" step.
pub const DEFAULT_VAULT_PAGE_SIZE: usize = page_size_bounds::DEFAULT;

/// Maximum playlist pages followed before giving up on a playlist.
pub const DEFAULT_MAX_PLAYLIST_PAGES: usize = page_cap_bounds::DEFAULT;

/// Base URL of the YouTube Data API v3.
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_GUTTER_PX <= MAX_GUTTER_PX);

    assert!(DEFAULT_SWIPE_THRESHOLD >= swipe_bounds::MIN);
    assert!(DEFAULT_SWIPE_THRESHOLD <= swipe_bounds::MAX);

    assert!(DEFAULT_TRANSITION_MS >= transition_bounds::MIN_MS);
    assert!(DEFAULT_TRANSITION_MS <= transition_bounds::MAX_MS);

    assert!(DEFAULT_VAULT_PAGE_SIZE >= page_size_bounds::MIN);
    assert!(DEFAULT_VAULT_PAGE_SIZE <= page_size_bounds::MAX);

    assert!(DEFAULT_MAX_PLAYLIST_PAGES >= page_cap_bounds::MIN);
    assert!(DEFAULT_MAX_PLAYLIST_PAGES <= page_cap_bounds::MAX);
};
