// SPDX-License-Identifier: MPL-2.0
//! Fixed-size event ring.
//!
//! Keeps the most recent events of a session. Once the ring is full each
//! push hands back the oldest entry so the owner can count what was lost.

use std::collections::VecDeque;

pub use crate::domain::ui::BufferCapacity;

/// Oldest-first ring holding at most [`BufferCapacity`] items.
///
/// ```
/// use folio_lens::diagnostics::{BufferCapacity, EventRing};
///
/// let mut ring = EventRing::new(BufferCapacity::new(100));
/// for i in 0..101 {
///     ring.push(i);
/// }
/// assert_eq!(ring.iter().next(), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct EventRing<T> {
    items: VecDeque<T>,
    limit: usize,
}

impl<T> EventRing<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            items: VecDeque::new(),
            limit: capacity.value(),
        }
    }

    /// Appends `item`, returning the entry it pushed out when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.limit {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
