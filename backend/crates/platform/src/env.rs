//! Environment Configuration Helpers
//!
//! Configuration structs read optional overrides from the environment.
//! A missing variable keeps the default silently; an unparseable one keeps
//! the default and logs a warning.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Parse `raw` (the value found under `key`, if any) or fall back to `default`
pub fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                key,
                value = %raw,
                error = %e,
                "Invalid configuration value, using default"
            );
            default
        }
    }
}

/// Parse a millisecond duration, falling back to `default`
pub fn duration_ms_or(key: &str, raw: Option<String>, default: Duration) -> Duration {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(parse_or(key, raw, default_ms))
}
