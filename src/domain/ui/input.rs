// SPDX-License-Identifier: MPL-2.0
//! Host-agnostic input events.
//!
//! The host translates its native keyboard, pointer and touch events into
//! these types before handing them to the gallery.

use super::newtypes::SwipeThreshold;

/// Keys the gallery reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Tab,
    /// Shift+Tab.
    BackTab,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Tab" if shift => Key::BackTab,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }

    /// Enter and Space activate the focused trigger.
    #[must_use]
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// What a pointer click landed on inside an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// The displayed image or modal body.
    Content,
    /// Previous/next/close buttons and other controls.
    Control,
}

/// Horizontal direction a committed swipe moves the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// End-of-drag measurements reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Horizontal displacement in pixels (negative = dragged left).
    pub offset_x: f32,
    /// Horizontal release velocity in pixels per second (signed).
    pub velocity_x: f32,
}

impl SwipeGesture {
    #[must_use]
    pub fn new(offset_x: f32, velocity_x: f32) -> Self {
        Self {
            offset_x,
            velocity_x,
        }
    }

    /// Swipe power: displacement magnitude scaled by signed velocity.
    ///
    /// A short fast flick and a long slow drag can both exceed the
    /// threshold.
    #[must_use]
    pub fn power(&self) -> f32 {
        self.offset_x.abs() * self.velocity_x
    }

    /// Returns the committed direction, or `None` if the gesture is too weak.
    #[must_use]
    pub fn direction(&self, threshold: SwipeThreshold) -> Option<SwipeDirection> {
        let power = self.power();
        if power < -threshold.value() {
            Some(SwipeDirection::Next)
        } else if power > threshold.value() {
            Some(SwipeDirection::Previous)
        } else {
            None
        }
    }
}
