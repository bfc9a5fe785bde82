// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording gallery activity.
//!
//! # Architecture
//!
//! - [`EventRing`]: Fixed-size ring that reports evicted entries
//! - [`GalleryEvent`]: User actions and warnings with a session offset
//! - [`DiagnosticsLog`]: Bounded event log with JSON export

mod buffer;
mod events;
mod log;

pub use buffer::{BufferCapacity, EventRing};
pub use events::{GalleryEvent, GalleryEventKind, UserAction, WarningEvent};
pub use log::DiagnosticsLog;
