// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod input;
pub mod newtypes;

pub use input::{ClickTarget, Key, SwipeDirection, SwipeGesture};
pub use newtypes::{
    BufferCapacity, PageCap, PageSize, SwipeThreshold, TransitionDuration,
};
