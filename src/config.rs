//! Runtime settings read from the environment (and `.env` on the server).

use std::net::SocketAddr;
use std::time::Duration;

use crate::common::ConfigError;

pub const LOOKUP_DELAY_ENV: &str = "CODECRAFT_LOOKUP_DELAY_MS";
pub const LOG_FILTER_ENV: &str = "CODECRAFT_LOG";
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";

pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Artificial latency applied to every course lookup.
    pub lookup_delay: Duration,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Overrides the Leptos `site-addr` when set.
    pub bind_addr: Option<SocketAddr>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lookup_delay: DEFAULT_LOOKUP_DELAY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            bind_addr: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(raw) = get(LOOKUP_DELAY_ENV) {
            let ms = raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: LOOKUP_DELAY_ENV,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.lookup_delay = Duration::from_millis(ms);
        }

        if let Some(filter) = get(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }

        if let Some(raw) = get(BIND_ADDR_ENV) {
            let addr = raw.parse::<SocketAddr>().map_err(|e| ConfigError::InvalidValue {
                key: BIND_ADDR_ENV,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
            config.bind_addr = Some(addr);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(config_from(&[]).unwrap(), SiteConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from(&[
            (LOOKUP_DELAY_ENV, "250"),
            (LOG_FILTER_ENV, "codecraft=debug"),
            (BIND_ADDR_ENV, "0.0.0.0:9000"),
        ])
        .unwrap();

        assert_eq!(config.lookup_delay, Duration::from_millis(250));
        assert_eq!(config.log_filter, "codecraft=debug");
        assert_eq!(config.bind_addr, Some("0.0.0.0:9000".parse().unwrap()));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(LOOKUP_DELAY_ENV, "  "), (BIND_ADDR_ENV, "")]).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn rejects_malformed_delay() {
        let err = config_from(&[(LOOKUP_DELAY_ENV, "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: LOOKUP_DELAY_ENV, .. }
        ));
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        assert!(config_from(&[(BIND_ADDR_ENV, "localhost")]).is_err());
    }
}
