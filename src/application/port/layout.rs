// SPDX-License-Identifier: MPL-2.0
//! Masonry layout port definition.
//!
//! The packed-grid algorithm lives in a third-party layout library owned by
//! the host. The filter engine only needs to initialize it once content has
//! loaded and to re-arrange it with the visible subset after every change.

use crate::domain::media::MediaId;

/// Options handed to the layout library at initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Selector matching every grid item.
    pub item_selector: String,
    /// Selector of the element whose width defines one column.
    pub column_width_selector: String,
    /// Horizontal gap between columns, in pixels.
    pub gutter_px: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            item_selector: ".gallery-item".to_string(),
            column_width_selector: ".gallery-sizer".to_string(),
            gutter_px: 16,
        }
    }
}

/// Port for the external masonry layout library.
pub trait LayoutAdapter {
    /// Initializes the layout on the gallery container.
    fn initialize(&mut self, options: &LayoutOptions);

    /// Re-arranges the grid so that exactly `visible` items are shown,
    /// in the given order.
    fn arrange(&mut self, visible: &[MediaId]);
}

/// Layout adapter that does nothing, for hosts without a masonry grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLayout;

impl LayoutAdapter for NoopLayout {
    fn initialize(&mut self, _options: &LayoutOptions) {}

    fn arrange(&mut self, _visible: &[MediaId]) {}
}

/// Layout adapter that records every call, for tests and tracing hosts.
#[derive(Debug, Default, Clone)]
pub struct RecordingLayout {
    /// Options of every `initialize` call.
    pub initialized: Vec<LayoutOptions>,
    /// Visible ids of every `arrange` call.
    pub arrangements: Vec<Vec<MediaId>>,
}

impl RecordingLayout {
    /// Ids passed to the most recent `arrange` call.
    #[must_use]
    pub fn last_arrangement(&self) -> Option<&[MediaId]> {
        self.arrangements.last().map(Vec::as_slice)
    }
}

impl LayoutAdapter for RecordingLayout {
    fn initialize(&mut self, options: &LayoutOptions) {
        self.initialized.push(options.clone());
    }

    fn arrange(&mut self, visible: &[MediaId]) {
        self.arrangements.push(visible.to_vec());
    }
}
