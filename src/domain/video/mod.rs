// SPDX-License-Identifier: MPL-2.0
//! Video catalog domain types.
//!
//! This module contains video-related value objects and enums that are
//! independent of any presentation or infrastructure concerns.

pub mod types;

pub use types::{
    EntryOrigin, UnknownVideoType, VideoCatalogEntry, VideoId, VideoMetadata, VideoType,
    PLACEHOLDER_TITLE,
};
