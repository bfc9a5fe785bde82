// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The lightbox steps through a snapshot of the entries that were visible
//! when it was opened. Changing the gallery filter while the lightbox is
//! open does not affect the snapshot.
//!
//! Only position and zoom live here. Visibility, dismissal (Escape and
//! backdrop clicks) and the scroll lock go through the
//! [`ModalController`](super::ModalController) like every other overlay;
//! the gallery resets the navigator once the close transition is over.
//!
//! ```text
//! Closed --open(list, i)--> Open { current: i }
//! Open   --next/previous--> Open { current ± 1 mod len }
//! Open   --jump_to(i)-----> Open { current: i }   (no-op if i >= len)
//! Open   --close---------> Closed
//! ```

use crate::domain::media::MediaEntry;
use crate::domain::ui::{Key, SwipeDirection, SwipeGesture, SwipeThreshold};
use std::sync::Arc;

/// Navigation state information for rendering the lightbox chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current position in the navigable list (0-indexed).
    pub current_index: usize,
    /// Number of entries in the navigable list.
    pub total_count: usize,
    /// Caption of the displayed entry.
    pub caption: String,
    /// Whether previous/next controls should be shown.
    pub has_siblings: bool,
    pub zoomed: bool,
}

impl NavigationInfo {
    /// One-based position label, e.g. `"3 / 7"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.total_count)
    }
}

/// Lightbox session.
#[derive(Debug, Clone, Default)]
pub enum LightboxSession {
    #[default]
    Closed,
    Open {
        items: Arc<[MediaEntry]>,
        current: usize,
        zoomed: bool,
    },
}

/// What a lightbox operation did, so the caller can update side state
/// (modal phase, diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Opened { index: usize, total: usize },
    Moved { from: usize, to: usize },
    ZoomChanged(bool),
    Closed,
    Ignored,
}

/// Owns the [`LightboxSession`] and interprets input while it is open.
#[derive(Debug, Clone, Default)]
pub struct LightboxNavigator {
    session: LightboxSession,
    swipe_threshold: SwipeThreshold,
}

impl LightboxNavigator {
    #[must_use]
    pub fn new(swipe_threshold: SwipeThreshold) -> Self {
        Self {
            session: LightboxSession::Closed,
            swipe_threshold,
        }
    }

    /// Opens the lightbox on `items[index]`.
    ///
    /// An empty list or an out-of-range index leaves the state untouched.
    /// Opening while already open replaces the snapshot.
    pub fn open(
        &mut self,
        items: impl Into<Arc<[MediaEntry]>>,
        index: usize,
    ) -> LightboxAction {
        let items = items.into();
        if index >= items.len() {
            tracing::debug!(index, len = items.len(), "lightbox open ignored");
            return LightboxAction::Ignored;
        }
        let total = items.len();
        self.session = LightboxSession::Open {
            items,
            current: index,
            zoomed: false,
        };
        LightboxAction::Opened { index, total }
    }

    pub fn next(&mut self) -> LightboxAction {
        self.step(1)
    }

    pub fn previous(&mut self) -> LightboxAction {
        self.step(-1)
    }

    /// Moves to `index`; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> LightboxAction {
        match &mut self.session {
            LightboxSession::Open { items, current, .. } if index < items.len() => {
                let from = std::mem::replace(current, index);
                LightboxAction::Moved { from, to: index }
            }
            _ => LightboxAction::Ignored,
        }
    }

    /// Closes the lightbox and forgets the snapshot, index and zoom.
    pub fn close(&mut self) -> LightboxAction {
        match std::mem::take(&mut self.session) {
            LightboxSession::Open { .. } => LightboxAction::Closed,
            LightboxSession::Closed => LightboxAction::Ignored,
        }
    }

    pub fn toggle_zoom(&mut self) -> LightboxAction {
        match &mut self.session {
            LightboxSession::Open { zoomed, .. } => {
                *zoomed = !*zoomed;
                LightboxAction::ZoomChanged(*zoomed)
            }
            LightboxSession::Closed => LightboxAction::Ignored,
        }
    }

    /// Handles an arrow key. Keys are inert while closed; Escape belongs to
    /// the modal controller.
    pub fn handle_key(&mut self, key: Key) -> LightboxAction {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            _ => LightboxAction::Ignored,
        }
    }

    /// Handles the end of a horizontal drag.
    pub fn handle_swipe(&mut self, gesture: SwipeGesture) -> LightboxAction {
        if !self.is_open() {
            return LightboxAction::Ignored;
        }
        match gesture.direction(self.swipe_threshold) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => LightboxAction::Ignored,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.session, LightboxSession::Open { .. })
    }

    #[must_use]
    pub fn session(&self) -> &LightboxSession {
        &self.session
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.session {
            LightboxSession::Open { current, .. } => Some(*current),
            LightboxSession::Closed => None,
        }
    }

    /// Entry currently displayed.
    #[must_use]
    pub fn current(&self) -> Option<&MediaEntry> {
        match &self.session {
            LightboxSession::Open { items, current, .. } => items.get(*current),
            LightboxSession::Closed => None,
        }
    }

    #[must_use]
    pub fn info(&self) -> Option<NavigationInfo> {
        match &self.session {
            LightboxSession::Open {
                items,
                current,
                zoomed,
            } => Some(NavigationInfo {
                current_index: *current,
                total_count: items.len(),
                caption: items
                    .get(*current)
                    .map(|e| e.caption().to_string())
                    .unwrap_or_default(),
                has_siblings: items.len() > 1,
                zoomed: *zoomed,
            }),
            LightboxSession::Closed => None,
        }
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
    }

    fn step(&mut self, delta: isize) -> LightboxAction {
        let LightboxSession::Open {
            items,
            current,
            zoomed,
        } = &mut self.session
        else {
            return LightboxAction::Ignored;
        };
        let len = items.len();
        let from = *current;
        let to = if delta >= 0 {
            (from + 1) % len
        } else {
            (from + len - 1) % len
        };
        *current = to;
        *zoomed = false;
        LightboxAction::Moved { from, to }
    }
}
