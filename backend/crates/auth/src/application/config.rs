//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::env::duration_ms_or;
use platform::password::{CredentialHasher, HasherConfig};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// scrypt cost parameters
    pub hasher: HasherConfig,
    /// Upper bound for every identity store call
    pub persistence_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hasher: HasherConfig::default(),
            persistence_timeout: Duration::from_secs(5),
        }
    }
}

impl AuthConfig {
    /// Read overrides from the process environment
    ///
    /// - `AUTH_PERSISTENCE_TIMEOUT_MS` - identity store deadline
    ///
    /// The scrypt cost is fixed in code: stored credentials do not record it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (defaults for missing keys)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            persistence_timeout: duration_ms_or(
                "AUTH_PERSISTENCE_TIMEOUT_MS",
                lookup("AUTH_PERSISTENCE_TIMEOUT_MS"),
                defaults.persistence_timeout,
            ),
            ..defaults
        }
    }

    /// Hasher built from the configured cost parameters
    pub fn credential_hasher(&self) -> CredentialHasher {
        CredentialHasher::new(self.hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.hasher, HasherConfig::default());
        assert_eq!(config.hasher.log_n, 14);
        assert_eq!(config.persistence_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AuthConfig::from_lookup(|key| {
            (key == "AUTH_PERSISTENCE_TIMEOUT_MS").then(|| "1500".to_string())
        });

        assert_eq!(config.persistence_timeout, Duration::from_millis(1500));
        assert_eq!(config.hasher, HasherConfig::default());
    }

    #[test]
    fn test_scrypt_cost_ignores_environment() {
        let config = AuthConfig::from_lookup(|key| match key {
            "AUTH_SCRYPT_LOG_N" => Some("10".to_string()),
            _ => None,
        });

        assert_eq!(config.hasher.log_n, 14);
        assert_eq!(config.credential_hasher().config(), &HasherConfig::default());
    }

    #[test]
    fn test_from_lookup_invalid_values_fall_back() {
        let config = AuthConfig::from_lookup(|key| match key {
            "AUTH_PERSISTENCE_TIMEOUT_MS" => Some("soon".to_string()),
            _ => None,
        });

        assert_eq!(config.persistence_timeout, Duration::from_secs(5));
    }
}
