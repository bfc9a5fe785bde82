// SPDX-License-Identifier: MPL-2.0
//! Filter engine for the gallery grid.
//!
//! The engine owns the active [`CategoryFilter`], derives the visible subset
//! of the catalog and drives the masonry [`LayoutAdapter`].
//!
//! # Readiness
//!
//! The layout library can only arrange items once their images have loaded.
//! Until the host calls [`FilterEngine::layout_ready`], filter selections are
//! held back (the most recent one wins) and applied as soon as the layout
//! is initialized.

use super::catalog::MediaCatalog;
use crate::application::port::layout::{LayoutAdapter, LayoutOptions};
use crate::domain::media::{CategoryFilter, MediaEntry, MediaId};

/// Readiness of the layout library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutGate {
    /// Content is still loading; holds the latest deferred selection.
    Initializing { pending: Option<CategoryFilter> },
    /// The layout is initialized and accepts re-arrangement.
    Ready,
}

/// Result of a filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The layout is not ready yet; the selection will apply later.
    Deferred,
    /// The selection was applied. `changed` is `false` when it was already active.
    Applied { changed: bool },
}

/// Presentation of one filter control, derived from engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub filter: CategoryFilter,
    pub active: bool,
}

impl FilterChip {
    #[must_use]
    pub fn label(&self) -> &str {
        self.filter.label()
    }
}

/// Computes the visible subset of a catalog and keeps the layout in sync.
#[derive(Debug)]
pub struct FilterEngine<L: LayoutAdapter> {
    catalog: MediaCatalog,
    active: CategoryFilter,
    visible: Vec<MediaId>,
    layout: L,
    options: LayoutOptions,
    gate: LayoutGate,
}

impl<L: LayoutAdapter> FilterEngine<L> {
    /// Creates an engine showing the whole catalog, waiting for the layout.
    pub fn new(catalog: MediaCatalog, layout: L, options: LayoutOptions) -> Self {
        let visible = Self::compute_visible(&catalog, &CategoryFilter::All);
        Self {
            catalog,
            active: CategoryFilter::All,
            visible,
            layout,
            options,
            gate: LayoutGate::Initializing { pending: None },
        }
    }

    /// Initializes the layout library and applies any deferred selection.
    ///
    /// Calling it again after the first time only re-arranges the grid.
    /// Returns whether a deferred selection changed the visible set.
    pub fn layout_ready(&mut self) -> bool {
        let pending = match std::mem::replace(&mut self.gate, LayoutGate::Ready) {
            LayoutGate::Initializing { pending } => {
                self.layout.initialize(&self.options);
                pending
            }
            LayoutGate::Ready => None,
        };

        let changed = pending.is_some_and(|filter| self.apply(filter));
        self.layout.arrange(&self.visible);
        tracing::debug!(filter = self.active.label(), changed, "gallery layout ready");
        changed
    }

    /// Selects a filter.
    ///
    /// Exactly one filter is active at a time; selecting the active one again
    /// leaves the visible set unchanged and only re-triggers the layout.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> FilterOutcome {
        if let LayoutGate::Initializing { pending } = &mut self.gate {
            *pending = Some(filter);
            return FilterOutcome::Deferred;
        }

        let changed = self.apply(filter);
        self.layout.arrange(&self.visible);
        FilterOutcome::Applied { changed }
    }

    /// Swaps the catalog, keeping the active filter.
    pub fn replace_catalog(&mut self, catalog: MediaCatalog) {
        self.catalog = catalog;
        self.visible = Self::compute_visible(&self.catalog, &self.active);
        if self.is_ready() {
            self.layout.arrange(&self.visible);
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.gate, LayoutGate::Ready)
    }

    #[must_use]
    pub fn gate(&self) -> &LayoutGate {
        &self.gate
    }

    /// Currently applied filter (deferred selections are not reflected).
    #[must_use]
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    #[must_use]
    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    /// Ids of visible entries, in catalog order.
    #[must_use]
    pub fn visible_ids(&self) -> &[MediaId] {
        &self.visible
    }

    /// Visible entries, in catalog order.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&MediaEntry> {
        self.catalog.visible(&self.active)
    }

    /// Filter controls: "all" followed by every declared category.
    #[must_use]
    pub fn controls(&self) -> Vec<FilterChip> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.catalog
                    .categories()
                    .iter()
                    .cloned()
                    .map(CategoryFilter::Only),
            )
            .map(|filter| FilterChip {
                active: filter == self.active,
                filter,
            })
            .collect()
    }

    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    fn apply(&mut self, filter: CategoryFilter) -> bool {
        if filter == self.active {
            return false;
        }
        tracing::debug!(from = self.active.label(), to = filter.label(), "filter changed");
        self.visible = Self::compute_visible(&self.catalog, &filter);
        self.active = filter;
        true
    }

    fn compute_visible(catalog: &MediaCatalog, filter: &CategoryFilter) -> Vec<MediaId> {
        catalog
            .visible(filter)
            .into_iter()
            .map(|e| e.id().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::layout::RecordingLayout;
    use crate::application::query::catalog::{CatalogBuilder, MediaSpec};
    use crate::domain::media::Category;

    fn catalog() -> MediaCatalog {
        let tags = ["Landing", "Landing", "Vectors", "Mockups", "Vectors", "Logos"];
        let mut builder = CatalogBuilder::new(
            ["Landing", "Vectors", "Mockups", "Logos"]
                .into_iter()
                .map(Category::new),
        );
        for (i, tag) in tags.iter().enumerate() {
            builder
                .push(MediaSpec::image(format!("img{}", i + 1), format!("{}.jpg", i + 1), tag))
                .expect("valid entry");
        }
        builder.build()
    }

    fn ready_engine() -> FilterEngine<RecordingLayout> {
        let mut engine =
            FilterEngine::new(catalog(), RecordingLayout::default(), LayoutOptions::default());
        engine.layout_ready();
        engine
    }

    fn ids(engine: &FilterEngine<RecordingLayout>) -> Vec<&str> {
        engine.visible_ids().iter().map(MediaId::as_str).collect()
    }

    #[test]
    fn vectors_filter_selects_third_and_fifth() {
        let mut engine = ready_engine();
        let outcome = engine.set_filter(CategoryFilter::parse("Vectors"));
        assert_eq!(outcome, FilterOutcome::Applied { changed: true });
        assert_eq!(ids(&engine), vec!["img3", "img5"]);
        assert_eq!(
            engine.layout().last_arrangement().map(<[MediaId]>::len),
            Some(2)
        );
    }

    #[test]
    fn applying_same_filter_twice_is_idempotent() {
        let mut engine = ready_engine();
        engine.set_filter(CategoryFilter::parse("Landing"));
        let once: Vec<MediaId> = engine.visible_ids().to_vec();
        let outcome = engine.set_filter(CategoryFilter::parse("Landing"));
        assert_eq!(outcome, FilterOutcome::Applied { changed: false });
        assert_eq!(engine.visible_ids(), once.as_slice());
    }

    #[test]
    fn visible_set_is_complete_for_every_filter() {
        let mut engine = ready_engine();
        let all = engine.catalog().clone();
        for chip in engine.controls() {
            engine.set_filter(chip.filter.clone());
            for entry in all.entries() {
                let expected = match &chip.filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(c) => entry.category() == Some(c),
                };
                assert_eq!(engine.visible_ids().contains(entry.id()), expected);
            }
        }
    }

    #[test]
    fn selections_before_layout_ready_are_deferred() {
        let mut engine =
            FilterEngine::new(catalog(), RecordingLayout::default(), LayoutOptions::default());
        assert_eq!(
            engine.set_filter(CategoryFilter::parse("Logos")),
            FilterOutcome::Deferred
        );
        assert_eq!(
            engine.set_filter(CategoryFilter::parse("Mockups")),
            FilterOutcome::Deferred
        );
        assert_eq!(engine.active(), &CategoryFilter::All);
        assert!(engine.layout().initialized.is_empty());
        assert!(engine.layout().arrangements.is_empty());

        assert!(engine.layout_ready());

        assert_eq!(engine.layout().initialized.len(), 1);
        assert_eq!(ids(&engine), vec!["img4"]);
        assert_eq!(
            engine.layout().last_arrangement(),
            Some(&[MediaId::new("img4")][..])
        );
    }

    #[test]
    fn layout_is_initialized_once() {
        let mut engine = ready_engine();
        assert!(!engine.layout_ready());
        assert_eq!(engine.layout().initialized.len(), 1);
        assert_eq!(engine.layout().arrangements.len(), 2);
    }

    #[test]
    fn exactly_one_chip_is_active() {
        let mut engine = ready_engine();
        engine.set_filter(CategoryFilter::parse("Mockups"));
        let chips = engine.controls();
        assert_eq!(chips.len(), 5);
        let active: Vec<&str> = chips.iter().filter(|c| c.active).map(FilterChip::label).collect();
        assert_eq!(active, vec!["Mockups"]);
    }

    #[test]
    fn replace_catalog_keeps_active_filter() {
        let mut engine = ready_engine();
        engine.set_filter(CategoryFilter::parse("Logos"));
        let mut builder = CatalogBuilder::new([Category::new("Logos")]);
        builder
            .extend([
                MediaSpec::image("n1", "n1.jpg", "Logos"),
                MediaSpec::image("n2", "n2.jpg", "Logos"),
            ])
            .expect("valid entries");
        engine.replace_catalog(builder.build());
        assert_eq!(ids(&engine), vec!["n1", "n2"]);
    }
}
