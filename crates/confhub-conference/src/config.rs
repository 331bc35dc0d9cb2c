//! Service configuration read from Shuttle secrets

use std::time::Duration;
use thiserror::Error;

use crate::services::CircuitBreakerConfig;

pub const DEFAULT_KEYNOTE_SERVICE_URL: &str = "http://localhost:8081";
pub const DEFAULT_KEYNOTE_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_BREAKER_FAILURE_THRESHOLD: u32 = 5;
pub const DEFAULT_BREAKER_COOLDOWN_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Conference service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub keynote_service_url: String,
    pub keynote_timeout: Duration,
    pub keynote_breaker: CircuitBreakerConfig,
    pub seed_sample_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            keynote_service_url: DEFAULT_KEYNOTE_SERVICE_URL.to_string(),
            keynote_timeout: Duration::from_millis(DEFAULT_KEYNOTE_TIMEOUT_MS),
            keynote_breaker: CircuitBreakerConfig {
                failure_threshold: DEFAULT_BREAKER_FAILURE_THRESHOLD,
                open_cooldown: Duration::from_secs(DEFAULT_BREAKER_COOLDOWN_SECS),
            },
            seed_sample_data: false,
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

impl ServiceConfig {
    /// Build the configuration from a key lookup, e.g. `|k| secrets.get(k)`.
    /// Missing keys take their defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let keynote_service_url = match lookup("KEYNOTE_SERVICE_URL") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some(url) => {
                return Err(ConfigError::Invalid {
                    key: "KEYNOTE_SERVICE_URL",
                    value: url,
                    reason: "expected an http(s) URL".to_string(),
                })
            }
            None => DEFAULT_KEYNOTE_SERVICE_URL.to_string(),
        };

        let timeout_ms = parse_or(&lookup, "KEYNOTE_TIMEOUT_MS", DEFAULT_KEYNOTE_TIMEOUT_MS)?;
        let failure_threshold = parse_or(
            &lookup,
            "KEYNOTE_BREAKER_FAILURE_THRESHOLD",
            DEFAULT_BREAKER_FAILURE_THRESHOLD,
        )?;
        if failure_threshold == 0 {
            return Err(ConfigError::Invalid {
                key: "KEYNOTE_BREAKER_FAILURE_THRESHOLD",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let cooldown_secs = parse_or(
            &lookup,
            "KEYNOTE_BREAKER_COOLDOWN_SECS",
            DEFAULT_BREAKER_COOLDOWN_SECS,
        )?;
        let seed_sample_data = parse_or(&lookup, "SEED_SAMPLE_DATA", false)?;

        Ok(Self {
            keynote_service_url,
            keynote_timeout: Duration::from_millis(timeout_ms),
            keynote_breaker: CircuitBreakerConfig {
                failure_threshold,
                open_cooldown: Duration::from_secs(cooldown_secs),
            },
            seed_sample_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.keynote_timeout, Duration::from_secs(3));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_reads_every_key() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("KEYNOTE_SERVICE_URL", "https://keynotes.example.org"),
            ("KEYNOTE_TIMEOUT_MS", "500"),
            ("KEYNOTE_BREAKER_FAILURE_THRESHOLD", "2"),
            ("KEYNOTE_BREAKER_COOLDOWN_SECS", "10"),
            ("SEED_SAMPLE_DATA", "true"),
        ]))
        .unwrap();

        assert_eq!(config.keynote_service_url, "https://keynotes.example.org");
        assert_eq!(config.keynote_timeout, Duration::from_millis(500));
        assert_eq!(config.keynote_breaker.failure_threshold, 2);
        assert_eq!(config.keynote_breaker.open_cooldown, Duration::from_secs(10));
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = ServiceConfig::from_lookup(lookup(&[("KEYNOTE_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "KEYNOTE_TIMEOUT_MS",
                ..
            }
        ));

        assert!(
            ServiceConfig::from_lookup(lookup(&[("KEYNOTE_BREAKER_FAILURE_THRESHOLD", "0")]))
                .is_err()
        );
        assert!(ServiceConfig::from_lookup(lookup(&[("KEYNOTE_SERVICE_URL", "keynotes:8081")]))
            .is_err());
        assert!(ServiceConfig::from_lookup(lookup(&[("SEED_SAMPLE_DATA", "yes")])).is_err());
    }
}
