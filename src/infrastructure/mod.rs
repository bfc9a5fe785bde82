// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus file-backed loaders.
//!
//! # Available Adapters
//!
//! - [`youtube`]: YouTube Data API v3 client (implements [`VideoSource`])
//! - [`catalog_file`]: Static media catalog read from TOML
//!
//! [`VideoSource`]: crate::application::port::VideoSource

pub mod catalog_file;
pub mod youtube;

pub use catalog_file::{load_catalog, parse_catalog};
pub use youtube::YouTubeClient;
