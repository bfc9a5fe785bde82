// SPDX-License-Identifier: MPL-2.0
//! Media catalog assembly and the observable catalog store.
//!
//! A [`MediaCatalog`] is immutable once built: entries keep their insertion
//! order forever and views (filters, lightbox lists) are derived from it.
//! Updates replace the whole catalog through [`CatalogStore::replace`],
//! which notifies subscribers with the new snapshot.

use crate::domain::media::{Category, CategoryFilter, MediaEntry, MediaId, MediaKind};
use crate::error::CatalogError;
use std::collections::HashSet;
use std::sync::Arc;

/// Input describing one entry before it is placed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSpec {
    pub id: String,
    pub kind: MediaKind,
    pub source_url: String,
    pub thumbnail_url: Option<String>,
    /// Tags in declaration order. The first tag naming a declared category
    /// becomes the entry's filter category.
    pub tags: Vec<String>,
    pub caption: String,
}

impl MediaSpec {
    /// Convenience constructor for an image with a single tag.
    #[must_use]
    pub fn image(id: impl Into<String>, source_url: impl Into<String>, tag: &str) -> Self {
        Self {
            id: id.into(),
            kind: MediaKind::Image,
            source_url: source_url.into(),
            thumbnail_url: None,
            tags: vec![tag.to_string()],
            caption: String::new(),
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// Builds a [`MediaCatalog`], assigning insertion order and resolving
/// each entry's primary category.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
    entries: Vec<MediaEntry>,
    seen: HashSet<MediaId>,
}

impl CatalogBuilder {
    /// Creates a builder for a gallery exposing the given filter categories.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut declared = Vec::new();
        for category in categories {
            if !declared.contains(&category) {
                declared.push(category);
            }
        }
        Self {
            categories: declared,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyId`] for a blank id and
    /// [`CatalogError::DuplicateId`] if the id was already used.
    pub fn push(&mut self, spec: MediaSpec) -> Result<&mut Self, CatalogError> {
        let id = spec.id.trim();
        if id.is_empty() {
            return Err(CatalogError::EmptyId);
        }
        let id = MediaId::new(id);
        if !self.seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateId(id));
        }

        let category = self.resolve_category(&spec.tags);
        let order = self.entries.len();
        self.entries.push(MediaEntry::new(
            id,
            spec.kind,
            spec.source_url,
            spec.thumbnail_url,
            category,
            spec.caption,
            order,
        ));
        Ok(self)
    }

    /// Appends every entry, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`CatalogBuilder::push`].
    pub fn extend(
        &mut self,
        specs: impl IntoIterator<Item = MediaSpec>,
    ) -> Result<&mut Self, CatalogError> {
        for spec in specs {
            self.push(spec)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> MediaCatalog {
        MediaCatalog {
            entries: self.entries.into(),
            categories: self.categories.into(),
        }
    }

    // First declared tag wins; otherwise fall back to the first tag.
    fn resolve_category(&self, tags: &[String]) -> Option<Category> {
        let tags: Vec<&str> = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        tags.iter()
            .find(|tag| self.categories.iter().any(|c| c.as_str() == **tag))
            .or_else(|| tags.first())
            .map(|tag| Category::new(*tag))
    }
}

/// Ordered, immutable collection of gallery entries.
///
/// Cloning is cheap: entries are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaCatalog {
    entries: Arc<[MediaEntry]>,
    categories: Arc<[Category]>,
}

impl MediaCatalog {
    #[must_use]
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    /// Declared filter categories, in chip order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &MediaId) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Entries matching `filter`, in catalog order.
    #[must_use]
    pub fn visible(&self, filter: &CategoryFilter) -> Vec<&MediaEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Returns `true` if both catalogs share the same entry storage.
    #[must_use]
    pub fn same_snapshot(&self, other: &MediaCatalog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Handle returned by [`CatalogStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&MediaCatalog) + Send>;

/// Observable holder of the current catalog.
///
/// One store is owned by the host for the lifetime of a gallery view and
/// torn down explicitly with [`CatalogStore::teardown`].
#[derive(Default)]
pub struct CatalogStore {
    catalog: MediaCatalog,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: MediaCatalog) -> Self {
        Self {
            catalog,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> MediaCatalog {
        self.catalog.clone()
    }

    /// Registers a listener called after every [`CatalogStore::replace`].
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&MediaCatalog) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Swaps in a new catalog and notifies every subscriber.
    pub fn replace(&mut self, catalog: MediaCatalog) {
        self.catalog = catalog;
        for (_, listener) in &mut self.listeners {
            listener(&self.catalog);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Drops every listener and empties the catalog.
    pub fn teardown(&mut self) {
        self.listeners.clear();
        self.catalog = MediaCatalog::default();
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("catalog", &self.catalog)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
