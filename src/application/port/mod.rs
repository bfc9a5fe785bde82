// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host and infrastructure
//! adapters implement. These traits use only domain types, so the
//! application layer stays independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`layout`]: Masonry grid layout library
//! - [`video`]: Remote video host (playlists and metadata)

pub mod layout;
pub mod video;

pub use layout::{LayoutAdapter, LayoutOptions, NoopLayout, RecordingLayout};
pub use video::{FetchError, PlaylistPage, VideoSource};
