//! Tracing initialisation

use common::error::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AccountServiceConfig;

/// Install a global fmt subscriber filtered by `config.log_filter`.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init_tracing(config: &AccountServiceConfig) -> Result<bool> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        Error::ConfigurationError(format!("Invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = AccountServiceConfig::new(false, "account_service=notalevel");
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigurationError(_)));
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        let config = AccountServiceConfig::default();
        init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
