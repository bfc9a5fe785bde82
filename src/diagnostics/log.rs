// SPDX-License-Identifier: MPL-2.0
//! Session-scoped diagnostics log.

use super::buffer::{BufferCapacity, EventRing};
use super::events::{GalleryEvent, GalleryEventKind};
use std::time::Instant;

/// Records gallery events in a bounded buffer and exports them as JSON.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: EventRing<GalleryEvent>,
    evicted: usize,
    started_at: Instant,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: EventRing::new(capacity),
            evicted: 0,
            started_at: Instant::now(),
        }
    }

    pub fn record(&mut self, kind: impl Into<GalleryEventKind>) {
        let offset_ms =
            u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        let event = GalleryEvent {
            offset_ms,
            kind: kind.into(),
        };
        if self.events.push(event).is_some() {
            self.evicted += 1;
        }
    }

    /// Events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GalleryEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events dropped because the log was full.
    #[must_use]
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.evicted = 0;
    }

    /// Exports every retained event as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let events: Vec<&GalleryEvent> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{UserAction, WarningEvent};

    #[test]
    fn records_in_order_and_exports_array() {
        let mut log = DiagnosticsLog::default();
        log.record(UserAction::SelectFilter {
            filter: "Vectors".to_string(),
        });
        log.record(WarningEvent::FetchFailed { requests: 2 });

        let json = log.to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["action"], "select_filter");
        assert_eq!(array[1]["warning"], "fetch_failed");
    }

    #[test]
    fn capacity_bounds_retained_events() {
        let mut log = DiagnosticsLog::new(BufferCapacity::new(0));
        for _ in 0..150 {
            log.record(UserAction::CloseLightbox);
        }
        assert_eq!(log.len(), 100);
        assert_eq!(log.evicted(), 50);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.evicted(), 0);
    }
}
