// SPDX-License-Identifier: MPL-2.0
//! Modal session controller.
//!
//! Every overlay (lightbox, video player, login, signup...) is registered
//! here under a [`ModalId`], optionally inside an exclusive
//! group. Visibility changes are split in two phases so the host can run
//! its opacity/scale transition:
//!
//! ```text
//! Hidden --open--> Opening --next frame--> Open
//! Open/Opening --close--> Closing { until } --tick(now >= until)--> Hidden
//! ```
//!
//! A modal holds the shared [`ScrollLock`] from `open` until it is fully
//! hidden. Re-opening a modal that is still closing cancels the close.

use super::scroll_lock::ScrollLock;
use crate::domain::ui::{ClickTarget, Key, TransitionDuration};
use std::fmt;
use std::time::Instant;

/// Identifier of a registered modal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModalId(String);

impl ModalId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Visibility phase of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Visible, transition not started yet.
    Opening,
    /// Visible, transition running or done.
    Open,
    /// Transition out running; hidden once `until` is reached.
    Closing { until: Instant },
}

impl ModalPhase {
    /// Whether the host must render the modal.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !matches!(self, ModalPhase::Hidden)
    }

    /// Whether the modal counts as open for dismissal purposes.
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, ModalPhase::Opening | ModalPhase::Open)
    }
}

#[derive(Debug, Clone)]
struct ModalSlot {
    id: ModalId,
    group: Option<String>,
    phase: ModalPhase,
}

/// Phase change reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalChange {
    Opened(ModalId),
    Closing(ModalId),
    Hidden(ModalId),
}

/// Tracks the phase of every registered modal.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    slots: Vec<ModalSlot>,
    transition: TransitionDuration,
}

impl ModalController {
    #[must_use]
    pub fn new(transition: TransitionDuration) -> Self {
        Self {
            slots: Vec::new(),
            transition,
        }
    }

    /// Registers a modal. Modals sharing a `group` are mutually exclusive.
    ///
    /// Registering an existing id updates its group.
    pub fn register(&mut self, id: impl Into<ModalId>, group: Option<&str>) {
        let id = id.into();
        let group = group.map(str::to_string);
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => slot.group = group,
            None => self.slots.push(ModalSlot {
                id,
                group,
                phase: ModalPhase::Hidden,
            }),
        }
    }

    /// Opens `id`, first closing any shown sibling of its group.
    ///
    /// Returns the phase changes in the order they happened; an unknown id
    /// or an already shown modal yields no change.
    pub fn open(
        &mut self,
        id: &ModalId,
        now: Instant,
        lock: &mut ScrollLock,
    ) -> Vec<ModalChange> {
        let Some(group) = self.slot(id).map(|s| s.group.clone()) else {
            tracing::debug!(modal = %id, "open ignored for unregistered modal");
            return Vec::new();
        };

        let mut changes = Vec::new();
        if let Some(group) = group {
            let siblings: Vec<ModalId> = self
                .slots
                .iter()
                .filter(|s| s.id != *id && s.group.as_deref() == Some(group.as_str()))
                .map(|s| s.id.clone())
                .collect();
            for sibling in &siblings {
                changes.extend(self.close(sibling, now));
            }
        }

        if let Some(slot) = self.slots.iter_mut().find(|s| s.id == *id) {
            if !slot.phase.is_shown() {
                slot.phase = ModalPhase::Opening;
                lock.acquire(id.clone());
                tracing::debug!(modal = %id, "modal opening");
                changes.push(ModalChange::Opened(id.clone()));
            }
        }
        changes
    }

    /// Starts the closing transition of `id` if it is shown.
    pub fn close(&mut self, id: &ModalId, now: Instant) -> Option<ModalChange> {
        let until = now + self.transition.as_duration();
        let slot = self.slots.iter_mut().find(|s| s.id == *id)?;
        if !slot.phase.is_shown() {
            return None;
        }
        slot.phase = ModalPhase::Closing { until };
        tracing::debug!(modal = %id, "modal closing");
        Some(ModalChange::Closing(id.clone()))
    }

    /// Starts the closing transition of every shown modal.
    pub fn close_all(&mut self, now: Instant) -> Vec<ModalChange> {
        let shown: Vec<ModalId> = self.shown().cloned().collect();
        shown.iter().filter_map(|id| self.close(id, now)).collect()
    }

    /// Advances `Opening` modals to `Open`. Call once per rendered frame.
    pub fn on_frame(&mut self) {
        for slot in &mut self.slots {
            if slot.phase == ModalPhase::Opening {
                slot.phase = ModalPhase::Open;
            }
        }
    }

    /// Hides modals whose closing transition has elapsed and releases
    /// their scroll lock hold.
    pub fn tick(&mut self, now: Instant, lock: &mut ScrollLock) -> Vec<ModalChange> {
        let mut changes = Vec::new();
        for slot in &mut self.slots {
            if let ModalPhase::Closing { until } = slot.phase {
                if now >= until {
                    slot.phase = ModalPhase::Hidden;
                    lock.release(&slot.id);
                    changes.push(ModalChange::Hidden(slot.id.clone()));
                }
            }
        }
        changes
    }

    /// Handles a click inside the overlay of `id`: only the backdrop closes.
    pub fn handle_click(
        &mut self,
        id: &ModalId,
        target: ClickTarget,
        now: Instant,
    ) -> Option<ModalChange> {
        match target {
            ClickTarget::Backdrop => self.close(id, now),
            ClickTarget::Content | ClickTarget::Control => None,
        }
    }

    /// Escape closes every shown modal; other keys are ignored.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> Vec<ModalChange> {
        if key == Key::Escape {
            self.close_all(now)
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn phase(&self, id: &ModalId) -> ModalPhase {
        self.slot(id).map(|s| s.phase).unwrap_or_default()
    }

    /// Ids of modals currently open or opening.
    pub fn shown(&self) -> impl Iterator<Item = &ModalId> {
        self.slots
            .iter()
            .filter(|s| s.phase.is_shown())
            .map(|s| &s.id)
    }

    #[must_use]
    pub fn any_shown(&self) -> bool {
        self.shown().next().is_some()
    }

    #[must_use]
    pub fn transition(&self) -> TransitionDuration {
        self.transition
    }

    fn slot(&self, id: &ModalId) -> Option<&ModalSlot> {
        self.slots.iter().find(|s| s.id == *id)
    }
}
