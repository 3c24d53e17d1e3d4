//! Process configuration read from the environment.

use std::net::SocketAddr;

use packrat_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "PACKRAT_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "PACKRAT_LOG_FORMAT";
pub const FIRST_ID_VAR: &str = "PACKRAT_FIRST_ID";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// API server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// First permanent id handed out by the repositories.
    pub first_id: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
            first_id: 1,
        }
    }
}

impl ApiConfig {
    /// Read settings from process environment variables; unset variables
    /// take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR_VAR,
                message: format!("'{raw}': {e}"),
            })?,
            None => defaults.bind_addr,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(|message| ConfigError::Invalid {
                key: LOG_FORMAT_VAR,
                message,
            })?,
            None => defaults.log_format,
        };

        let first_id = match lookup(FIRST_ID_VAR) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                key: FIRST_ID_VAR,
                message: format!("'{raw}': {e}"),
            })?,
            None => defaults.first_id,
        };

        Ok(Self {
            bind_addr,
            log_format,
            first_id,
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
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn reads_every_setting() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (LOG_FORMAT_VAR, "pretty"),
            (FIRST_ID_VAR, "500"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.first_id, 500);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "nowhere")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: BIND_ADDR_VAR, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: LOG_FORMAT_VAR, .. }));

        let err = ApiConfig::from_lookup(lookup(&[(FIRST_ID_VAR, "one")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid PACKRAT_FIRST_ID"));
    }
}
