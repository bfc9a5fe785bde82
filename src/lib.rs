// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a headless gallery engine for portfolio pages.
//!
//! It filters a media catalog by category, drives a keyboard/touch
//! lightbox over the visible items, coordinates modals through a shared
//! scroll lock and loads a "video vault" from YouTube playlists.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod logging;
pub mod paths;

pub use gallery::{Gallery, GallerySettings};
