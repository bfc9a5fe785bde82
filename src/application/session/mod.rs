// SPDX-License-Identifier: MPL-2.0
//! Interactive session state.
//!
//! These state machines react to host input events and report what changed
//! so the caller can keep side state (scroll lock, diagnostics) consistent.
//!
//! - [`lightbox`]: Full-screen viewer position and zoom (`LightboxNavigator`)
//! - [`modal`]: Overlay phases and exclusive groups (`ModalController`)
//! - [`scroll_lock`]: Holder-set background scroll lock (`ScrollLock`)
//! - [`focus`]: Tab focus over grid triggers (`FocusRing`)

pub mod focus;
pub mod lightbox;
pub mod modal;
pub mod scroll_lock;

pub use focus::{FocusAction, FocusRing};
pub use lightbox::{LightboxAction, LightboxNavigator, LightboxSession, NavigationInfo};
pub use modal::{ModalChange, ModalController, ModalId, ModalPhase};
pub use scroll_lock::ScrollLock;
