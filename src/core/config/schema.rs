//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the listen address must parse as a
//! socket address and the history capacity must be at least 1.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Service configuration file contents.
///
/// All fields are optional; absent values fall back to defaults.
///
/// # Example
///
/// ```toml
/// listen = "127.0.0.1:4990"
/// history_capacity = 512
/// seed = "/etc/metrograph/seed.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Socket address the service listens on.
    pub listen: Option<String>,

    /// Number of mutation records retained.
    pub history_capacity: Option<usize>,

    /// Path to a JSON seed file applied at startup.
    pub seed: Option<PathBuf>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(listen) = &self.listen {
            if listen.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid listen address '{listen}'"
                )));
            }
        }

        if let Some(capacity) = self.history_capacity {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue(
                    "history_capacity must be at least 1".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_valid() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn full_file_parses() {
        let config: FileConfig = toml::from_str(
            r#"
            listen = "0.0.0.0:9000"
            history_capacity = 64
            seed = "seed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listen.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(config.history_capacity, Some(64));
        assert_eq!(config.seed, Some(PathBuf::from("seed.json")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<FileConfig>("port = 8080").is_err());
    }

    #[test]
    fn bad_listen_address_rejected() {
        let config: FileConfig = toml::from_str(r#"listen = "not-an-addr""#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let config: FileConfig = toml::from_str("history_capacity = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
