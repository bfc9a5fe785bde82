// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Derived views over the catalog and the video vault
//! - [`session`]: Interactive state machines (lightbox, modals, focus)
//! - [`loader`]: Asynchronous vault loading over a [`port::VideoSource`]
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Hosts drive the application layer through [`crate::gallery::Gallery`]
//!
//! # Example
//!
//! ```ignore
//! use folio_lens::application::loader::{PlaylistSource, VaultLoader};
//! use folio_lens::application::query::VideoVault;
//! use folio_lens::infrastructure::youtube::YouTubeClient;
//!
//! let mut vault = VideoVault::new(static_videos, page_size);
//! let loader = VaultLoader::for_vault(Arc::new(YouTubeClient::new(key)?), &vault, playlists);
//! loader.load(&mut vault).await?;
//! ```

pub mod loader;
pub mod port;
pub mod query;
pub mod session;
