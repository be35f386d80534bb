//! Configuration for the account service

use std::env;

use common::error::{Error, Result};

/// Configuration for the account service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountServiceConfig {
    /// Log committed transactions at info level instead of debug
    pub transaction_logging: bool,
    /// `EnvFilter` directive used by `telemetry::init_tracing`
    pub log_filter: String,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            transaction_logging: false,
            log_filter: "info".to_string(),
        }
    }
}

impl AccountServiceConfig {
    /// Create a new configuration with custom values
    pub fn new(transaction_logging: bool, log_filter: impl Into<String>) -> Self {
        Self {
            transaction_logging,
            log_filter: log_filter.into(),
        }
    }

    /// Create a new configuration using environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let transaction_logging = match lookup("TRANSACTION_LOGGING") {
            Some(value) => parse_flag(&value)?,
            None => defaults.transaction_logging,
        };

        let log_filter = lookup("LOG_FILTER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            transaction_logging,
            log_filter,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(Error::ConfigurationError(format!(
            "TRANSACTION_LOGGING must be true/false/1/0, got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AccountServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AccountServiceConfig::default());
        assert!(!config.transaction_logging);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_values() {
        let config = AccountServiceConfig::from_lookup(lookup_from(&[
            ("TRANSACTION_LOGGING", "1"),
            ("LOG_FILTER", "account_service=debug"),
        ]))
        .unwrap();

        assert!(config.transaction_logging);
        assert_eq!(config.log_filter, "account_service=debug");
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        let config =
            AccountServiceConfig::from_lookup(lookup_from(&[("TRANSACTION_LOGGING", "TRUE")])).unwrap();
        assert!(config.transaction_logging);
    }

    #[test]
    fn test_invalid_flag() {
        let err = AccountServiceConfig::from_lookup(lookup_from(&[("TRANSACTION_LOGGING", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }
}
