// SPDX-License-Identifier: MPL-2.0
//! Background scroll lock shared by every overlay.
//!
//! The host page has a single "scroll disabled" flag. Several overlays can
//! want it at the same time (a video modal opened on top of the lightbox),
//! so the lock tracks *which* modal holds it. The page stays locked while
//! at least one holder remains, and acquiring or releasing twice is
//! harmless.

use super::modal::ModalId;
use std::collections::BTreeSet;

/// Holder-set scroll lock, keyed by the overlay's [`ModalId`].
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: BTreeSet<ModalId>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `holder`. Returns `true` if the page went from scrollable
    /// to locked.
    pub fn acquire(&mut self, holder: ModalId) -> bool {
        let was_locked = self.is_locked();
        if self.holders.insert(holder.clone()) {
            tracing::trace!(%holder, holders = self.holders.len(), "scroll lock acquired");
        }
        !was_locked && self.is_locked()
    }

    /// Removes `holder`. Returns `true` if the page became scrollable again.
    pub fn release(&mut self, holder: &ModalId) -> bool {
        if !self.holders.remove(holder) {
            return false;
        }
        tracing::trace!(%holder, holders = self.holders.len(), "scroll lock released");
        !self.is_locked()
    }

    /// Whether background scrolling is currently disabled.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[must_use]
    pub fn is_held_by(&self, holder: &ModalId) -> bool {
        self.holders.contains(holder)
    }

    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.holders.len()
    }

    /// Drops every hold, for teardown.
    pub fn clear(&mut self) {
        self.holders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_acquire_needs_single_release() {
        let mut lock = ScrollLock::new();
        let lightbox = ModalId::new("lightbox");
        assert!(lock.acquire(lightbox.clone()));
        assert!(!lock.acquire(lightbox.clone()));
        assert!(lock.release(&lightbox));
        assert!(!lock.is_locked());
    }

    #[test]
    fn overlapping_holders_compose() {
        let mut lock = ScrollLock::new();
        let lightbox = ModalId::new("lightbox");
        let video = ModalId::new("video");
        lock.acquire(lightbox.clone());
        lock.acquire(video.clone());

        assert!(!lock.release(&video));
        assert!(lock.is_locked());
        assert!(lock.is_held_by(&lightbox));

        assert!(lock.release(&lightbox));
        assert!(!lock.is_locked());
    }

    #[test]
    fn releasing_unknown_holder_is_noop() {
        let mut lock = ScrollLock::new();
        lock.acquire(ModalId::new("lightbox"));
        assert!(!lock.release(&ModalId::new("login")));
        assert_eq!(lock.holder_count(), 1);
    }
}
