//! Tracing subscriber setup for processes embedding the chaincode.
//!
//! The chaincode itself only emits `tracing` events; installing a
//! subscriber is left to the embedding process, which can call
//! [`init_tracing`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ChaincodeConfig;
use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter {filter:?}: {reason}")]
    Filter {
        /// Directive as configured.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the log filter from the configured level.
///
/// `RUST_LOG` is not consulted here: [`ChaincodeConfig::from_env`] already
/// falls back to it when `LC_LOG_LEVEL` is unset.
///
/// # Errors
///
/// Returns `TelemetryError::Filter` if the configured level does not parse.
pub fn env_filter(config: &ChaincodeConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_tracing(config: &ChaincodeConfig) -> Result<(), TelemetryError> {
    let env_filter = env_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    }

    tracing::info!(
        chaincode = crate::CHAINCODE_NAME,
        version = crate::VERSION,
        log_level = %config.log_level,
        index_key = %config.index_key,
        guard_reserved_keys = config.guard_reserved_keys,
        "L/C chaincode tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    // Installing the global subscriber is left to integration tests.

    #[test]
    fn test_configured_level_parses() {
        let config = ChaincodeConfig {
            log_level: "lc_chaincode=debug,warn".to_string(),
            ..ChaincodeConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_configured_level_is_the_filter() {
        let config = ChaincodeConfig {
            log_level: "warn".to_string(),
            ..ChaincodeConfig::default()
        };
        let filter = env_filter(&config).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_lc_log_level_decides_filter_over_rust_log() {
        let lookup = |name: &str| match name {
            "LC_LOG_LEVEL" => Some("error".to_string()),
            "RUST_LOG" => Some("trace".to_string()),
            _ => None,
        };
        let filter = env_filter(&ChaincodeConfig::from_lookup(lookup)).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_invalid_level_is_reported() {
        let config = ChaincodeConfig {
            log_level: "lc_chaincode=loud".to_string(),
            ..ChaincodeConfig::default()
        };
        assert!(matches!(
            env_filter(&config),
            Err(TelemetryError::Filter { .. })
        ));
    }
}
