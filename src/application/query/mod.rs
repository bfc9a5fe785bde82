// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These services own derived views over domain data: which entries are
//! visible, in which order, and how many are displayed.
//!
//! # Available Services
//!
//! - [`catalog`]: Catalog assembly and the observable store (`CatalogStore`)
//! - [`filter`]: Category filtering and layout sync (`FilterEngine`)
//! - [`vault`]: Video vault paging and type filter (`VideoVault`)

pub mod catalog;
pub mod filter;
pub mod vault;

pub use catalog::{CatalogBuilder, CatalogStore, MediaCatalog, MediaSpec, SubscriptionId};
pub use filter::{FilterChip, FilterEngine, FilterOutcome, LayoutGate};
pub use vault::{VaultUpdate, VideoVault};
