// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gallery tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Page Size
// =============================================================================

/// "Load more" page size bounds (1 to 48 entries).
pub mod page_size_bounds {
    /// Minimum entries revealed per page.
    pub const MIN: usize = 1;
    /// Maximum entries revealed per page.
    pub const MAX: usize = 48;
    /// Default entries revealed per page.
    pub const DEFAULT: usize = 4;
}

/// Number of vault entries revealed by each "load more".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}

// =============================================================================
// Page Cap
// =============================================================================

/// Playlist pagination cap bounds (1 to 200 pages).
pub mod page_cap_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 200;
    /// 50 pages of 50 items covers 2500 videos.
    pub const DEFAULT: usize = 50;
}

/// Maximum number of playlist pages followed for a single playlist.
///
/// Guards against a host that keeps returning a continuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCap(usize);

impl PageCap {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_cap_bounds::MIN, page_cap_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageCap {
    fn default() -> Self {
        Self(page_cap_bounds::DEFAULT)
    }
}

// =============================================================================
// Swipe Threshold
// =============================================================================

/// Swipe commit threshold bounds, in `px * px/s` units.
pub mod swipe_bounds {
    pub const MIN: f32 = 1_000.0;
    pub const MAX: f32 = 100_000.0;
    pub const DEFAULT: f32 = 10_000.0;
}

/// Minimum swipe power (`|offset| * velocity`) for a drag to change slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}

// =============================================================================
// Transition Duration
// =============================================================================

/// Modal close transition bounds (200 to 300 ms).
pub mod transition_bounds {
    pub const MIN_MS: u64 = 200;
    pub const MAX_MS: u64 = 300;
    pub const DEFAULT_MS: u64 = 250;
}

/// Time a closing modal keeps animating before it is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Buffer Capacity
// =============================================================================

/// Diagnostics buffer capacity bounds (100 to 10000 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 1000;
}

/// Number of events retained by the diagnostics buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_clamps() {
        assert_eq!(PageSize::new(0).value(), page_size_bounds::MIN);
        assert_eq!(PageSize::new(1000).value(), page_size_bounds::MAX);
        assert_eq!(PageSize::new(12).value(), 12);
        assert_eq!(PageSize::default().value(), 4);
    }

    #[test]
    fn page_cap_clamps() {
        assert_eq!(PageCap::new(0).value(), page_cap_bounds::MIN);
        assert_eq!(PageCap::new(10_000).value(), page_cap_bounds::MAX);
        assert_eq!(PageCap::default().value(), page_cap_bounds::DEFAULT);
    }

    #[test]
    fn swipe_threshold_clamps_and_rejects_nan() {
        assert_eq!(SwipeThreshold::new(1.0).value(), swipe_bounds::MIN);
        assert_eq!(SwipeThreshold::new(1e9).value(), swipe_bounds::MAX);
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
    }

    #[test]
    fn transition_duration_clamps() {
        assert_eq!(TransitionDuration::from_millis(0).as_millis(), 200);
        assert_eq!(TransitionDuration::from_millis(5000).as_millis(), 300);
        assert_eq!(
            TransitionDuration::default().as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn buffer_capacity_clamps() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(100_000).value(),
            buffer_capacity_bounds::MAX
        );
        assert_eq!(BufferCapacity::new(500), BufferCapacity::new(500));
    }
}
