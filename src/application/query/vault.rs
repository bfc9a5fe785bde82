// SPDX-License-Identifier: MPL-2.0
//! Video vault state: merged catalog, type filter and "load more" paging.
//!
//! Static entries are inserted at construction and stay first in their
//! configured order. Playlist entries arrive later through
//! [`VaultUpdate`] messages and are only ever appended after them.

use crate::domain::ui::PageSize;
use crate::domain::video::{EntryOrigin, VideoCatalogEntry, VideoId, VideoMetadata, VideoType};
use std::collections::{HashMap, HashSet};

/// Message produced by the vault loader, applied in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultUpdate {
    /// Shuffled ids of the playlist configured at `index`.
    Playlist {
        index: usize,
        video_type: VideoType,
        ids: Vec<VideoId>,
    },
    /// Metadata for a batch of ids. Missing ids keep their placeholders.
    Metadata(HashMap<VideoId, VideoMetadata>),
    /// Every playlist has been processed.
    Finished,
}

/// Paginated, filterable video catalog.
#[derive(Debug, Clone)]
pub struct VideoVault {
    entries: Vec<VideoCatalogEntry>,
    known: HashSet<VideoId>,
    static_len: usize,
    page_size: PageSize,
    items_displayed: usize,
    type_filter: Option<VideoType>,
    finished: bool,
}

impl VideoVault {
    /// Creates a vault holding the static entries with placeholder metadata.
    ///
    /// Repeated ids are kept once, at their first position.
    pub fn new(
        static_videos: impl IntoIterator<Item = (VideoId, VideoType)>,
        page_size: PageSize,
    ) -> Self {
        let mut vault = Self {
            entries: Vec::new(),
            known: HashSet::new(),
            static_len: 0,
            page_size,
            items_displayed: page_size.value(),
            type_filter: None,
            finished: false,
        };
        for (id, video_type) in static_videos {
            vault.push(id, video_type, EntryOrigin::Static);
        }
        vault.static_len = vault.entries.len();
        vault
    }

    /// Appends a playlist's ids after every existing entry.
    ///
    /// Ids already present in the vault are skipped. Returns the number of
    /// entries added.
    pub fn append_playlist(
        &mut self,
        index: usize,
        video_type: VideoType,
        ids: impl IntoIterator<Item = VideoId>,
    ) -> usize {
        let before = self.entries.len();
        for id in ids {
            self.push(id, video_type, EntryOrigin::Playlist(index));
        }
        self.entries.len() - before
    }

    /// Replaces placeholders with fetched metadata. Returns the number of
    /// entries resolved.
    pub fn apply_metadata(&mut self, metadata: &HashMap<VideoId, VideoMetadata>) -> usize {
        let mut resolved = 0;
        for entry in &mut self.entries {
            if let Some(meta) = metadata.get(entry.video_id()) {
                entry.resolve(meta);
                resolved += 1;
            }
        }
        resolved
    }

    pub fn apply(&mut self, update: VaultUpdate) {
        match update {
            VaultUpdate::Playlist {
                index,
                video_type,
                ids,
            } => {
                let added = self.append_playlist(index, video_type, ids);
                tracing::debug!(playlist = index, added, "vault playlist appended");
            }
            VaultUpdate::Metadata(metadata) => {
                self.apply_metadata(&metadata);
            }
            VaultUpdate::Finished => self.finished = true,
        }
    }

    /// Sets the type filter and resets paging to the first page.
    ///
    /// Re-selecting the active filter keeps the current page count. Returns
    /// whether the filter changed.
    pub fn set_type_filter(&mut self, filter: Option<VideoType>) -> bool {
        if filter == self.type_filter {
            return false;
        }
        self.type_filter = filter;
        self.items_displayed = self.page_size.value();
        true
    }

    /// Shows one more page. Returns the number of entries newly displayed.
    pub fn load_more(&mut self) -> usize {
        if !self.has_more() {
            return 0;
        }
        let before = self.items_displayed();
        self.items_displayed += self.page_size.value();
        self.items_displayed() - before
    }

    /// `false` exactly when every visible entry is displayed.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items_displayed < self.visible_count()
    }

    /// Entries matching the type filter, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &VideoCatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| self.type_filter.is_none_or(|t| e.video_type() == t))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Entries currently rendered.
    #[must_use]
    pub fn displayed(&self) -> Vec<&VideoCatalogEntry> {
        self.visible().take(self.items_displayed).collect()
    }

    /// Displayed count, clamped to the number of visible entries.
    #[must_use]
    pub fn items_displayed(&self) -> usize {
        self.items_displayed.min(self.visible_count())
    }

    /// Entry count per video type, in [`VideoType::ALL`] order.
    #[must_use]
    pub fn type_counts(&self) -> Vec<(VideoType, usize)> {
        VideoType::ALL
            .into_iter()
            .map(|t| (t, self.entries.iter().filter(|e| e.video_type() == t).count()))
            .collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[VideoCatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn static_entries(&self) -> &[VideoCatalogEntry] {
        &self.entries[..self.static_len]
    }

    #[must_use]
    pub fn get(&self, id: &VideoId) -> Option<&VideoCatalogEntry> {
        self.entries.iter().find(|e| e.video_id() == id)
    }

    #[must_use]
    pub fn type_filter(&self) -> Option<VideoType> {
        self.type_filter
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn push(&mut self, id: VideoId, video_type: VideoType, origin: EntryOrigin) {
        if self.known.insert(id.clone()) {
            self.entries
                .push(VideoCatalogEntry::placeholder(id, video_type, origin));
        }
    }
}
