// SPDX-License-Identifier: MPL-2.0
//! `tracing` subscriber setup for the binary.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the
//! `[general] log_level` setting, otherwise [`DEFAULT_LOG_LEVEL`].

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter from `RUST_LOG` or the configured directive.
#[must_use]
pub fn env_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = configured
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// Installs a stderr formatter. Later calls are ignored.
pub fn init(configured: Option<&str>) {
    let result = tracing_subscriber::registry()
        .with(env_filter(configured))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
