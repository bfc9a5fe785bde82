// SPDX-License-Identifier: MPL-2.0
//! Category filtering types for the domain layer.
//!
//! A gallery shows either every entry or the entries of exactly one
//! category. There is no multi-select: selecting a category replaces the
//! previous selection.

use super::{Category, MediaEntry};

/// Active category selection of a gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every entry.
    #[default]
    All,
    /// Show only entries whose primary category equals this one.
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel label used by hosts for the "all" chip.
    pub const ALL_LABEL: &'static str = "all";

    /// Parses a host-provided selector, treating `"all"` (any case) as
    /// [`CategoryFilter::All`].
    #[must_use]
    pub fn parse(selector: &str) -> Self {
        let trimmed = selector.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            Self::All
        } else {
            Self::Only(Category::new(trimmed))
        }
    }

    /// Returns `true` if the entry belongs to the visible subset.
    #[must_use]
    pub fn matches(&self, entry: &MediaEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => entry.category() == Some(category),
        }
    }

    /// Returns `true` if this filter narrows the catalog.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Label shown on the matching filter chip.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}
