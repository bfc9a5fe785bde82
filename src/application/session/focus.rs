// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus over the visible grid triggers.
//!
//! Tab and Shift+Tab cycle through the visible items; Enter or Space
//! activates the focused one, which the gallery turns into a lightbox open.

use crate::domain::media::MediaId;
use crate::domain::ui::Key;

/// Result of a key press on the focus ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusAction {
    Focused(MediaId),
    /// Activate the trigger at this position of the visible list.
    Activate { index: usize, id: MediaId },
    Ignored,
}

/// Focus position within the visible triggers.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    items: Vec<MediaId>,
    focused: Option<usize>,
}

impl FocusRing {
    /// Replaces the focusable items, keeping focus on the same id if it is
    /// still present.
    pub fn reset(&mut self, items: &[MediaId]) {
        let keep = self.focused_id().cloned();
        self.items = items.to_vec();
        self.focused = keep.and_then(|id| self.items.iter().position(|i| *i == id));
    }

    pub fn handle_key(&mut self, key: Key) -> FocusAction {
        if self.items.is_empty() {
            return FocusAction::Ignored;
        }
        let len = self.items.len();
        match key {
            Key::Tab => {
                let next = self.focused.map_or(0, |i| (i + 1) % len);
                self.focus(next)
            }
            Key::BackTab => {
                let prev = self.focused.map_or(len - 1, |i| (i + len - 1) % len);
                self.focus(prev)
            }
            key if key.is_activation() => match self.focused {
                Some(index) => FocusAction::Activate {
                    index,
                    id: self.items[index].clone(),
                },
                None => FocusAction::Ignored,
            },
            _ => FocusAction::Ignored,
        }
    }

    /// Focuses the item at `index` directly (pointer hover, programmatic).
    pub fn focus(&mut self, index: usize) -> FocusAction {
        match self.items.get(index) {
            Some(id) => {
                self.focused = Some(index);
                FocusAction::Focused(id.clone())
            }
            None => FocusAction::Ignored,
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    #[must_use]
    pub fn focused_id(&self) -> Option<&MediaId> {
        self.focused.and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }
}
