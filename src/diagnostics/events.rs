// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gallery activity tracking.

use serde::{Deserialize, Serialize};

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Gallery
    // ==========================================================================
    /// Select a category filter chip.
    SelectFilter { filter: String },

    /// Activate a grid trigger with the keyboard.
    ActivateTrigger { index: usize },

    // ==========================================================================
    // Lightbox
    // ==========================================================================
    OpenLightbox { index: usize, total: usize },
    NavigateLightbox { from: usize, to: usize },
    ToggleZoom { zoomed: bool },
    CloseLightbox,

    // ==========================================================================
    // Modals
    // ==========================================================================
    OpenModal { id: String },
    CloseModal { id: String },

    // ==========================================================================
    // Video vault
    // ==========================================================================
    /// Reveal one more page of videos.
    LoadMore { displayed: usize },

    /// Change the vault type filter (`None` shows every type).
    SetVideoType {
        #[serde(skip_serializing_if = "Option::is_none")]
        video_type: Option<String>,
    },
}

/// Degraded-but-functional conditions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum WarningEvent {
    /// Remote calls failed and contributed no results.
    FetchFailed { requests: usize },

    /// Playlists were truncated at the page cap.
    PageCapReached { playlists: usize },

    /// The settings file could not be parsed; defaults are in use.
    ConfigFallback { key: String },
}

/// Kind of a recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryEventKind {
    UserAction(UserAction),
    Warning(WarningEvent),
}

/// A recorded event with its offset from the start of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryEvent {
    /// Milliseconds since the diagnostics log was created.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: GalleryEventKind,
}

impl From<UserAction> for GalleryEventKind {
    fn from(action: UserAction) -> Self {
        GalleryEventKind::UserAction(action)
    }
}

impl From<WarningEvent> for GalleryEventKind {
    fn from(warning: WarningEvent) -> Self {
        GalleryEventKind::Warning(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_tags() {
        let event = GalleryEvent {
            offset_ms: 12,
            kind: UserAction::OpenLightbox { index: 2, total: 7 }.into(),
        };
        let json = serde_json::to_value(&event).expect("serializable");
        assert_eq!(json["type"], "user_action");
        assert_eq!(json["action"], "open_lightbox");
        assert_eq!(json["total"], 7);
        assert_eq!(json["offset_ms"], 12);
    }

    #[test]
    fn warning_round_trips_through_json() {
        let event = GalleryEvent {
            offset_ms: 0,
            kind: WarningEvent::PageCapReached { playlists: 1 }.into(),
        };
        let json = serde_json::to_string(&event).expect("serializable");
        let back: GalleryEvent = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, event);
    }
}
