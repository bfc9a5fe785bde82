// SPDX-License-Identifier: MPL-2.0
//! Page-level gallery engine.
//!
//! [`Gallery`] wires the catalog store, filter engine, lightbox, modals,
//! focus ring and video vault together and keeps the shared scroll lock
//! and the diagnostics log consistent with every transition. Hosts feed
//! it input events and render from its accessors.
//!
//! The lightbox is registered with the modal controller under
//! [`LIGHTBOX_MODAL`], so it shares the two-phase transitions and the
//! scroll lock release of every other overlay. The navigator keeps the
//! snapshot until the close transition has finished.
//!
//! # Key routing
//!
//! 1. Escape closes every shown overlay, the lightbox included.
//! 2. Arrows reach the lightbox while it is the only shown overlay.
//! 3. With no overlay shown, Tab/Shift+Tab move focus over the visible
//!    grid and Enter/Space open the lightbox on the focused item.

use crate::application::loader::LoadSummary;
use crate::application::port::layout::{LayoutAdapter, LayoutOptions};
use crate::application::query::catalog::{CatalogStore, MediaCatalog, SubscriptionId};
use crate::application::query::filter::{FilterChip, FilterEngine, FilterOutcome};
use crate::application::query::vault::{VaultUpdate, VideoVault};
use crate::application::session::{
    FocusAction, FocusRing, LightboxAction, LightboxNavigator, ModalChange, ModalController,
    ModalId, ModalPhase, ScrollLock,
};
use crate::config::Config;
use crate::diagnostics::{
    BufferCapacity, DiagnosticsLog, GalleryEventKind, UserAction, WarningEvent,
};
use crate::domain::media::{CategoryFilter, MediaEntry, MediaId};
use crate::domain::ui::{
    ClickTarget, Key, PageSize, SwipeGesture, SwipeThreshold, TransitionDuration,
};
use crate::domain::video::VideoType;
use std::time::Instant;

/// Modal id reserved for the lightbox overlay.
pub const LIGHTBOX_MODAL: &str = "lightbox";

/// Tuning values for a [`Gallery`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GallerySettings {
    pub layout: LayoutOptions,
    pub swipe_threshold: SwipeThreshold,
    pub transition: TransitionDuration,
    pub diagnostics_capacity: BufferCapacity,
}

impl GallerySettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            layout: config.gallery.layout_options(),
            swipe_threshold: config.lightbox.swipe_threshold(),
            transition: config.modal.transition(),
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}

/// Headless gallery page state.
pub struct Gallery<L: LayoutAdapter> {
    store: CatalogStore,
    filter: FilterEngine<L>,
    lightbox: LightboxNavigator,
    modals: ModalController,
    lightbox_id: ModalId,
    scroll: ScrollLock,
    focus: FocusRing,
    vault: VideoVault,
    diagnostics: DiagnosticsLog,
}

impl<L: LayoutAdapter + std::fmt::Debug> std::fmt::Debug for Gallery<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("filter", &self.filter)
            .field("lightbox", &self.lightbox)
            .field("modals", &self.modals)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

impl<L: LayoutAdapter> Gallery<L> {
    /// Creates a gallery waiting for its layout to become ready.
    pub fn new(catalog: MediaCatalog, layout: L, settings: &GallerySettings) -> Self {
        let filter = FilterEngine::new(catalog.clone(), layout, settings.layout.clone());
        let mut focus = FocusRing::default();
        focus.reset(filter.visible_ids());
        let lightbox_id = ModalId::new(LIGHTBOX_MODAL);
        let mut modals = ModalController::new(settings.transition);
        modals.register(lightbox_id.clone(), None);
        Self {
            store: CatalogStore::new(catalog),
            filter,
            lightbox: LightboxNavigator::new(settings.swipe_threshold),
            modals,
            lightbox_id,
            scroll: ScrollLock::new(),
            focus,
            vault: VideoVault::new(std::iter::empty(), PageSize::default()),
            diagnostics: DiagnosticsLog::new(settings.diagnostics_capacity),
        }
    }

    /// Replaces the (empty) default vault.
    #[must_use]
    pub fn with_vault(mut self, vault: VideoVault) -> Self {
        self.vault = vault;
        self
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Publishes a new catalog to subscribers and the filter engine.
    ///
    /// An open lightbox keeps its snapshot.
    pub fn replace_catalog(&mut self, catalog: MediaCatalog) {
        self.filter.replace_catalog(catalog.clone());
        self.store.replace(catalog);
        self.focus.reset(self.filter.visible_ids());
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&MediaCatalog) + Send + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    #[must_use]
    pub fn catalog(&self) -> MediaCatalog {
        self.store.snapshot()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Marks the masonry layout ready and applies any deferred filter.
    pub fn layout_ready(&mut self) {
        if self.filter.layout_ready() {
            self.diagnostics.record(UserAction::SelectFilter {
                filter: self.filter.active().label().to_string(),
            });
        }
        self.focus.reset(self.filter.visible_ids());
    }

    pub fn select_filter(&mut self, filter: CategoryFilter) -> FilterOutcome {
        let label = filter.label().to_string();
        let outcome = self.filter.set_filter(filter);
        if outcome == (FilterOutcome::Applied { changed: true }) {
            self.focus.reset(self.filter.visible_ids());
            self.diagnostics
                .record(UserAction::SelectFilter { filter: label });
        }
        outcome
    }

    #[must_use]
    pub fn controls(&self) -> Vec<FilterChip> {
        self.filter.controls()
    }

    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        self.filter.active()
    }

    #[must_use]
    pub fn visible_entries(&self) -> Vec<&MediaEntry> {
        self.filter.visible_entries()
    }

    #[must_use]
    pub fn filter_engine(&self) -> &FilterEngine<L> {
        &self.filter
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    /// Opens the lightbox on the `index`-th visible entry.
    ///
    /// The lightbox overlay goes through the usual `Opening` frame phase
    /// and holds the scroll lock until its close transition ends.
    pub fn open_lightbox(&mut self, index: usize, now: Instant) -> LightboxAction {
        let snapshot: Vec<MediaEntry> = self
            .filter
            .visible_entries()
            .into_iter()
            .cloned()
            .collect();
        let action = self.lightbox.open(snapshot, index);
        if let LightboxAction::Opened { index, total } = action {
            self.modals.open(&self.lightbox_id, now, &mut self.scroll);
            self.diagnostics
                .record(UserAction::OpenLightbox { index, total });
        }
        action
    }

    /// Opens the lightbox on the visible entry with `id`.
    pub fn open_lightbox_at(&mut self, id: &MediaId, now: Instant) -> LightboxAction {
        match self.filter.visible_ids().iter().position(|v| v == id) {
            Some(index) => self.open_lightbox(index, now),
            None => LightboxAction::Ignored,
        }
    }

    pub fn lightbox_next(&mut self) -> LightboxAction {
        if !self.is_lightbox_shown() {
            return LightboxAction::Ignored;
        }
        let action = self.lightbox.next();
        self.after_lightbox(action)
    }

    pub fn lightbox_previous(&mut self) -> LightboxAction {
        if !self.is_lightbox_shown() {
            return LightboxAction::Ignored;
        }
        let action = self.lightbox.previous();
        self.after_lightbox(action)
    }

    pub fn lightbox_jump_to(&mut self, index: usize) -> LightboxAction {
        if !self.is_lightbox_shown() {
            return LightboxAction::Ignored;
        }
        let action = self.lightbox.jump_to(index);
        self.after_lightbox(action)
    }

    /// Starts the lightbox close transition.
    ///
    /// The snapshot stays readable and the scroll lock stays held until
    /// [`Gallery::tick`] reports the overlay hidden.
    pub fn close_lightbox(&mut self, now: Instant) -> LightboxAction {
        let change = self.modals.close(&self.lightbox_id, now);
        self.record_modal_changes(change.as_slice());
        Self::closing_action(change)
    }

    pub fn toggle_zoom(&mut self) -> LightboxAction {
        if !self.is_lightbox_shown() {
            return LightboxAction::Ignored;
        }
        let action = self.lightbox.toggle_zoom();
        self.after_lightbox(action)
    }

    /// Click inside the lightbox overlay; only the backdrop closes it.
    pub fn lightbox_click(&mut self, target: ClickTarget, now: Instant) -> LightboxAction {
        let change = self.modals.handle_click(&self.lightbox_id, target, now);
        self.record_modal_changes(change.as_slice());
        Self::closing_action(change)
    }

    pub fn lightbox_swipe(&mut self, gesture: SwipeGesture) -> LightboxAction {
        if !self.is_lightbox_shown() {
            return LightboxAction::Ignored;
        }
        let action = self.lightbox.handle_swipe(gesture);
        self.after_lightbox(action)
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxNavigator {
        &self.lightbox
    }

    /// Visibility phase of the lightbox overlay.
    #[must_use]
    pub fn lightbox_phase(&self) -> ModalPhase {
        self.modals.phase(&self.lightbox_id)
    }

    /// Whether the lightbox is open or opening (not closing).
    #[must_use]
    pub fn is_lightbox_shown(&self) -> bool {
        self.lightbox_phase().is_shown()
    }

    fn closing_action(change: Option<ModalChange>) -> LightboxAction {
        match change {
            Some(_) => LightboxAction::Closed,
            None => LightboxAction::Ignored,
        }
    }

    fn after_lightbox(&mut self, action: LightboxAction) -> LightboxAction {
        match action {
            LightboxAction::Moved { from, to } => {
                self.diagnostics
                    .record(UserAction::NavigateLightbox { from, to });
            }
            LightboxAction::ZoomChanged(zoomed) => {
                self.diagnostics.record(UserAction::ToggleZoom { zoomed });
            }
            LightboxAction::Opened { .. } | LightboxAction::Closed | LightboxAction::Ignored => {}
        }
        action
    }

    // =========================================================================
    // Modals
    // =========================================================================

    pub fn register_modal(&mut self, id: impl Into<ModalId>, group: Option<&str>) {
        self.modals.register(id, group);
    }

    /// Opens a registered modal. The lightbox id is ignored here; use
    /// [`Gallery::open_lightbox`].
    pub fn open_modal(&mut self, id: &ModalId, now: Instant) -> Vec<ModalChange> {
        if *id == self.lightbox_id {
            tracing::debug!(modal = %id, "lightbox must be opened with an entry index");
            return Vec::new();
        }
        let changes = self.modals.open(id, now, &mut self.scroll);
        self.record_modal_changes(&changes);
        changes
    }

    pub fn close_modal(&mut self, id: &ModalId, now: Instant) -> Option<ModalChange> {
        let change = self.modals.close(id, now);
        self.record_modal_changes(change.as_slice());
        change
    }

    pub fn close_all_modals(&mut self, now: Instant) -> Vec<ModalChange> {
        let changes = self.modals.close_all(now);
        self.record_modal_changes(&changes);
        changes
    }

    pub fn modal_click(
        &mut self,
        id: &ModalId,
        target: ClickTarget,
        now: Instant,
    ) -> Option<ModalChange> {
        let change = self.modals.handle_click(id, target, now);
        self.record_modal_changes(change.as_slice());
        change
    }

    /// Advances two-phase modal openings. Call once per rendered frame.
    pub fn on_frame(&mut self) {
        self.modals.on_frame();
    }

    /// Finishes elapsed close transitions, lightbox included.
    pub fn tick(&mut self, now: Instant) -> Vec<ModalChange> {
        let changes = self.modals.tick(now, &mut self.scroll);
        if changes
            .iter()
            .any(|c| matches!(c, ModalChange::Hidden(id) if *id == self.lightbox_id))
        {
            self.lightbox.close();
        }
        changes
    }

    #[must_use]
    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    fn record_modal_changes(&mut self, changes: &[ModalChange]) {
        for change in changes {
            let action = match change {
                // Recorded with its index by `open_lightbox`.
                ModalChange::Opened(id) if *id == self.lightbox_id => continue,
                ModalChange::Closing(id) if *id == self.lightbox_id => UserAction::CloseLightbox,
                ModalChange::Opened(id) => UserAction::OpenModal { id: id.to_string() },
                ModalChange::Closing(id) => UserAction::CloseModal { id: id.to_string() },
                ModalChange::Hidden(_) => continue,
            };
            self.diagnostics.record(action);
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Routes a key press to the overlays or the focus ring.
    pub fn handle_key(&mut self, key: Key, now: Instant) {
        if self.modals.any_shown() {
            if key == Key::Escape {
                let changes = self.modals.handle_key(key, now);
                self.record_modal_changes(&changes);
            } else if self.modals.shown().all(|id| *id == self.lightbox_id) {
                let action = self.lightbox.handle_key(key);
                self.after_lightbox(action);
            }
            return;
        }
        if let FocusAction::Activate { index, .. } = self.focus.handle_key(key) {
            self.diagnostics.record(UserAction::ActivateTrigger { index });
            self.open_lightbox(index, now);
        }
    }

    #[must_use]
    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    // =========================================================================
    // Video vault
    // =========================================================================

    #[must_use]
    pub fn vault(&self) -> &VideoVault {
        &self.vault
    }

    /// Mutable vault access, for
    /// [`VaultLoader::load`](crate::application::loader::VaultLoader::load).
    pub fn vault_mut(&mut self) -> &mut VideoVault {
        &mut self.vault
    }

    pub fn apply_vault_update(&mut self, update: VaultUpdate) {
        self.vault.apply(update);
    }

    pub fn load_more_videos(&mut self) -> usize {
        let added = self.vault.load_more();
        if added > 0 {
            self.diagnostics.record(UserAction::LoadMore {
                displayed: self.vault.items_displayed(),
            });
        }
        added
    }

    /// Filters the vault by type. Re-selecting the active type is a no-op.
    pub fn set_video_type(&mut self, video_type: Option<VideoType>) -> bool {
        let changed = self.vault.set_type_filter(video_type);
        if changed {
            self.diagnostics.record(UserAction::SetVideoType {
                video_type: video_type.map(|t| t.slug().to_string()),
            });
        }
        changed
    }

    /// Records the degraded parts of a finished vault load.
    pub fn record_load_summary(&mut self, summary: &LoadSummary) {
        if summary.failed_requests > 0 {
            self.diagnostics.record(WarningEvent::FetchFailed {
                requests: summary.failed_requests,
            });
        }
        if summary.capped_playlists > 0 {
            self.diagnostics.record(WarningEvent::PageCapReached {
                playlists: summary.capped_playlists,
            });
        }
    }

    // =========================================================================
    // Shared state
    // =========================================================================

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    pub fn record(&mut self, kind: impl Into<GalleryEventKind>) {
        self.diagnostics.record(kind);
    }

    /// Closes every overlay, releases the scroll lock and drops subscribers.
    pub fn teardown(&mut self) {
        let now = Instant::now();
        let settled = now + self.modals.transition().as_duration();
        self.modals.close_all(now);
        self.tick(settled);
        self.lightbox.close();
        self.scroll.clear();
        self.store.teardown();
        tracing::debug!("gallery torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::layout::RecordingLayout;
    use crate::application::query::catalog::{CatalogBuilder, MediaSpec};
    use crate::domain::media::Category;
    use std::time::Duration;

    fn gallery() -> Gallery<RecordingLayout> {
        let mut builder = CatalogBuilder::new(
            ["Landing", "Vectors", "Mockups", "Logos"]
                .into_iter()
                .map(Category::new),
        );
        let tags = ["Landing", "Landing", "Vectors", "Mockups", "Vectors", "Logos"];
        for (i, tag) in tags.iter().enumerate() {
            builder
                .push(MediaSpec::image(format!("img{}", i + 1), format!("{}.jpg", i + 1), tag))
                .expect("valid entry");
        }
        let mut gallery = Gallery::new(
            builder.build(),
            RecordingLayout::default(),
            &GallerySettings::default(),
        );
        gallery.layout_ready();
        gallery.register_modal("video", None);
        gallery
    }

    fn after_transition(start: Instant) -> Instant {
        start + TransitionDuration::default().as_duration()
    }

    #[test]
    fn lightbox_holds_scroll_lock_while_open() {
        let mut gallery = gallery();
        let now = Instant::now();
        gallery.open_lightbox(0, now);
        assert_eq!(gallery.lightbox_phase(), ModalPhase::Opening);
        assert!(gallery.is_scroll_locked());
        gallery.on_frame();
        assert_eq!(gallery.lightbox_phase(), ModalPhase::Open);

        assert_eq!(
            gallery.lightbox_click(ClickTarget::Content, now),
            LightboxAction::Ignored
        );
        assert!(gallery.is_scroll_locked());
        assert_eq!(
            gallery.lightbox_click(ClickTarget::Backdrop, now),
            LightboxAction::Closed
        );
        gallery.tick(after_transition(now));
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn lightbox_stays_visible_and_locked_while_closing() {
        let mut gallery = gallery();
        let start = Instant::now();
        gallery.open_lightbox(2, start);
        gallery.on_frame();
        assert_eq!(gallery.close_lightbox(start), LightboxAction::Closed);

        assert!(gallery.lightbox_phase().is_visible());
        assert!(!gallery.is_lightbox_shown());
        assert!(gallery.is_scroll_locked());
        assert_eq!(gallery.lightbox().current_index(), Some(2));
        assert_eq!(gallery.lightbox_next(), LightboxAction::Ignored);

        assert!(gallery.tick(start + Duration::from_millis(100)).is_empty());
        assert!(gallery.is_scroll_locked());

        let changes = gallery.tick(after_transition(start));
        assert_eq!(changes, vec![ModalChange::Hidden(ModalId::new(LIGHTBOX_MODAL))]);
        assert_eq!(gallery.lightbox_phase(), ModalPhase::Hidden);
        assert!(!gallery.lightbox().is_open());
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn reopening_lightbox_while_closing_keeps_it() {
        let mut gallery = gallery();
        let start = Instant::now();
        gallery.open_lightbox(0, start);
        gallery.close_lightbox(start);
        gallery.open_lightbox(3, start);
        assert!(gallery.tick(after_transition(start)).is_empty());
        assert!(gallery.is_lightbox_shown());
        assert_eq!(gallery.lightbox().current_index(), Some(3));
        assert!(gallery.is_scroll_locked());
    }

    #[test]
    fn escape_closes_modal_and_lightbox_together() {
        let mut gallery = gallery();
        let start = Instant::now();
        let video = ModalId::new("video");
        gallery.open_lightbox(1, start);
        gallery.open_modal(&video, start);

        gallery.handle_key(Key::ArrowRight, start);
        assert_eq!(gallery.lightbox().current_index(), Some(1));

        gallery.handle_key(Key::Escape, start);
        assert!(!gallery.modals().any_shown());
        assert!(gallery.is_scroll_locked());

        gallery.tick(after_transition(start));
        assert!(!gallery.lightbox().is_open());
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn closing_modal_over_lightbox_keeps_lock() {
        let mut gallery = gallery();
        let start = Instant::now();
        let video = ModalId::new("video");
        gallery.open_lightbox(1, start);
        gallery.open_modal(&video, start);
        gallery.close_modal(&video, start);
        gallery.tick(after_transition(start));

        assert!(gallery.is_lightbox_shown());
        assert!(gallery.is_scroll_locked());
        gallery.handle_key(Key::ArrowRight, start);
        assert_eq!(gallery.lightbox().current_index(), Some(2));
    }

    #[test]
    fn lightbox_id_cannot_be_opened_as_a_plain_modal() {
        let mut gallery = gallery();
        let changes = gallery.open_modal(&ModalId::new(LIGHTBOX_MODAL), Instant::now());
        assert!(changes.is_empty());
        assert!(!gallery.is_scroll_locked());
    }

    #[test]
    fn rapid_open_close_does_not_leak_lock() {
        let mut gallery = gallery();
        let now = Instant::now();
        for _ in 0..5 {
            gallery.open_lightbox(0, now);
            gallery.open_lightbox(2, now);
            gallery.close_lightbox(now);
        }
        gallery.tick(after_transition(now));
        assert!(!gallery.is_scroll_locked());
        assert_eq!(gallery.scroll_lock().holder_count(), 0);
    }

    #[test]
    fn keyboard_focus_opens_lightbox() {
        let mut gallery = gallery();
        let now = Instant::now();
        gallery.select_filter(CategoryFilter::parse("Vectors"));
        gallery.handle_key(Key::Tab, now);
        gallery.handle_key(Key::Tab, now);
        gallery.handle_key(Key::Enter, now);

        let current = gallery.lightbox().current().expect("lightbox open");
        assert_eq!(current.id().as_str(), "img5");
        gallery.handle_key(Key::ArrowRight, now);
        assert_eq!(gallery.lightbox().current_index(), Some(0));
    }

    #[test]
    fn lightbox_snapshot_survives_filter_change() {
        let mut gallery = gallery();
        gallery.select_filter(CategoryFilter::parse("Landing"));
        gallery.open_lightbox(1, Instant::now());
        gallery.select_filter(CategoryFilter::parse("Logos"));
        let info = gallery.lightbox().info().expect("open");
        assert_eq!(info.total_count, 2);
        assert_eq!(gallery.lightbox().current().map(|e| e.id().as_str()), Some("img2"));
    }

    #[test]
    fn user_actions_are_recorded() {
        let mut gallery = gallery();
        let now = Instant::now();
        gallery.select_filter(CategoryFilter::parse("Vectors"));
        gallery.open_lightbox(0, now);
        gallery.lightbox_next();
        gallery.close_lightbox(now);
        gallery.tick(after_transition(now));
        assert_eq!(gallery.diagnostics().len(), 4);
    }

    #[test]
    fn deferred_filter_is_recorded_when_layout_becomes_ready() {
        let mut gallery = Gallery::new(
            gallery().catalog(),
            RecordingLayout::default(),
            &GallerySettings::default(),
        );
        assert_eq!(
            gallery.select_filter(CategoryFilter::parse("Logos")),
            FilterOutcome::Deferred
        );
        assert!(gallery.diagnostics().is_empty());

        gallery.layout_ready();
        assert_eq!(gallery.diagnostics().len(), 1);
        assert_eq!(gallery.active_filter(), &CategoryFilter::parse("Logos"));

        gallery.layout_ready();
        assert_eq!(gallery.diagnostics().len(), 1);
    }

    #[test]
    fn reselecting_video_type_is_not_recorded() {
        let mut gallery = gallery();
        assert!(gallery.set_video_type(Some(VideoType::LivePerformance)));
        assert!(!gallery.set_video_type(Some(VideoType::LivePerformance)));
        assert_eq!(gallery.diagnostics().len(), 1);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut gallery = gallery();
        gallery.open_lightbox(0, Instant::now());
        gallery.open_modal(&ModalId::new("video"), Instant::now());
        gallery.teardown();
        assert!(!gallery.is_scroll_locked());
        assert!(!gallery.lightbox().is_open());
        assert_eq!(gallery.lightbox_phase(), ModalPhase::Hidden);
        assert!(!gallery.modals().any_shown());
    }
}
