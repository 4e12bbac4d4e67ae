//! Chaincode configuration from defaults or environment variables.

use std::env;

/// Default reserved key holding the record index.
pub const DEFAULT_INDEX_KEY: &str = "lcIndex";

/// Configuration for the chaincode service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Reserved key holding the record index.
    pub index_key: String,

    /// Reject `create`/`write` targeting the index key.
    pub guard_reserved_keys: bool,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for ChaincodeConfig {
    fn default() -> Self {
        Self {
            index_key: DEFAULT_INDEX_KEY.to_string(),
            guard_reserved_keys: true,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ChaincodeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LC_INDEX_KEY`: Reserved index key (default: lcIndex)
    /// - `LC_GUARD_RESERVED_KEYS`: Reject user writes to the index key (default: true)
    /// - `LC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LC_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            index_key: lookup("LC_INDEX_KEY")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.index_key),

            guard_reserved_keys: lookup("LC_GUARD_RESERVED_KEYS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.guard_reserved_keys),

            log_level: lookup("LC_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("LC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Legacy behavior: no reserved-key guard.
    #[must_use]
    pub fn unguarded() -> Self {
        Self {
            guard_reserved_keys: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ChaincodeConfig::default();
        assert_eq!(config.index_key, "lcIndex");
        assert!(config.guard_reserved_keys);
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = ChaincodeConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ChaincodeConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ChaincodeConfig::from_lookup(lookup(&[
            ("LC_INDEX_KEY", "\u{0}lc/index"),
            ("LC_GUARD_RESERVED_KEYS", "0"),
            ("RUST_LOG", "debug"),
            ("LC_JSON_LOGS", "TRUE"),
        ]));
        assert_eq!(config.index_key, "\u{0}lc/index");
        assert!(!config.guard_reserved_keys);
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }

    #[test]
    fn test_lc_log_level_wins_over_rust_log() {
        let config =
            ChaincodeConfig::from_lookup(lookup(&[("LC_LOG_LEVEL", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_index_key_ignored() {
        let config = ChaincodeConfig::from_lookup(lookup(&[("LC_INDEX_KEY", "")]));
        assert_eq!(config.index_key, DEFAULT_INDEX_KEY);
    }
}
