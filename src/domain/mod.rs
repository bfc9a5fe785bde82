// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so it can be
//! shared by any host.
//!
//! # Modules
//!
//! - [`media`]: Gallery entries ([`MediaEntry`](media::MediaEntry),
//!   [`CategoryFilter`](media::CategoryFilter))
//! - [`ui`]: Input events and clamped tuning values
//!   ([`SwipeGesture`](ui::SwipeGesture), [`PageSize`](ui::PageSize))
//! - [`video`]: Vault entries ([`VideoCatalogEntry`](video::VideoCatalogEntry),
//!   [`VideoType`](video::VideoType))

pub mod media;
pub mod ui;
pub mod video;
