//! Runtime knobs of the dashboard demo.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults reproduce the shipped demo. In the browser a JSON object stored
//! under `CONFIG_STORAGE_KEY` in `localStorage` may override any subset of
//! fields; missing or malformed entries fall back to the defaults.
//!
//! `App` provides the config as an `RwSignal` seeded with the defaults, which
//! is also what the server renders. The override is applied after hydration,
//! so views read the signal reactively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use super::notify::{DEFAULT_NOTICE_CAPACITY, DEFAULT_NOTICE_TTL_MS, NotificationQueue};
use crate::util::storage;

pub const CONFIG_STORAGE_KEY: &str = "tesora_dashboard_config";
pub const DEFAULT_UPLOAD_DELAY_MS: u32 = 2000;
pub const DEFAULT_EXPORT_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Recompute aggregate cards from working lists instead of showing the
    /// fixture figures.
    pub use_computed_aggregates: bool,
    pub upload_delay_ms: u32,
    pub export_delay_ms: u32,
    pub notice_capacity: usize,
    pub notice_ttl_ms: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            use_computed_aggregates: false,
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            export_delay_ms: DEFAULT_EXPORT_DELAY_MS,
            notice_capacity: DEFAULT_NOTICE_CAPACITY,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

impl DashboardConfig {
    /// The browser override, if one is stored. Always `None` outside the
    /// browser.
    #[must_use]
    pub fn load_override() -> Option<Self> {
        let config = storage::load_json::<Self>(CONFIG_STORAGE_KEY)?;
        log::info!("dashboard config override loaded: {config:?}");
        Some(config)
    }

    /// Parse an override document. Unknown keys are ignored and missing keys
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Empty notification queue sized by this config.
    #[must_use]
    pub fn notification_queue(&self) -> NotificationQueue {
        NotificationQueue::with_limits(self.notice_capacity, self.notice_ttl_ms)
    }
}
