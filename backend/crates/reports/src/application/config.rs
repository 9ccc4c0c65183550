//! Application Configuration
//!
//! Configuration for the estimate application layer.

use std::time::Duration;

use platform::env::duration_ms_or;

use crate::domain::value_objects::SearchWindow;

/// Estimate application configuration
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Search window and sample cap
    pub window: SearchWindow,
    /// Upper bound for the report store call
    pub persistence_timeout: Duration,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            window: SearchWindow::default(),
            persistence_timeout: Duration::from_secs(5),
        }
    }
}

impl EstimateConfig {
    /// Read `ESTIMATE_PERSISTENCE_TIMEOUT_MS` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            persistence_timeout: duration_ms_or(
                "ESTIMATE_PERSISTENCE_TIMEOUT_MS",
                lookup("ESTIMATE_PERSISTENCE_TIMEOUT_MS"),
                defaults.persistence_timeout,
            ),
            ..defaults
        }
    }
}
