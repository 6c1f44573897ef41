//! core::config
//!
//! Configuration loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config File Locations
//!
//! Searched in order, first hit wins:
//! 1. Explicit path passed by the caller (`--config`)
//! 2. `$METRO_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/metrograph/config.toml`
//! 4. `~/.config/metrograph/config.toml`
//!
//! A missing file (when no explicit path was given) yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use metrograph::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("listening on {}", config.listen());
//! println!("history capacity {}", config.history_capacity());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::history::DEFAULT_CAPACITY;

/// Default listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:4990";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "METRO_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Resolved configuration with defaults applied.
#[derive(Debug, Clone, Default)]
pub struct Config {
    file: FileConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// `explicit` is the `--config` path; when given, the file must exist
    /// and parse. Otherwise the standard locations are searched and an
    /// absent file falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a located file cannot be read, parsed, or
    /// fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_path(),
        };

        let file = match path {
            Some(path) => Self::parse_file(&path)?,
            None => FileConfig::default(),
        };
        file.validate()?;

        Ok(Self { file })
    }

    /// Build a config directly from parsed file contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if validation fails.
    pub fn from_file(file: FileConfig) -> Result<Self, ConfigError> {
        file.validate()?;
        Ok(Self { file })
    }

    fn parse_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Locate the config file in the standard search order.
    fn search_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let candidate = dirs::config_dir().map(|dir| dir.join("metrograph").join("config.toml"));
        candidate.filter(|path| path.exists())
    }

    /// The listen address, defaulting to [`DEFAULT_LISTEN`].
    ///
    /// Validation guarantees the stored value parses, so this cannot fail
    /// after a successful load.
    pub fn listen(&self) -> SocketAddr {
        self.file
            .listen
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 4990)))
    }

    /// The mutation history capacity.
    pub fn history_capacity(&self) -> usize {
        self.file.history_capacity.unwrap_or(DEFAULT_CAPACITY)
    }

    /// The seed file path, if configured.
    pub fn seed(&self) -> Option<&Path> {
        self.file.seed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file() {
        let config = Config::from_file(FileConfig::default()).unwrap();
        assert_eq!(config.listen().to_string(), DEFAULT_LISTEN);
        assert_eq!(config.history_capacity(), DEFAULT_CAPACITY);
        assert!(config.seed().is_none());
    }

    #[test]
    fn explicit_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen = \"0.0.0.0:7000\"\nhistory_capacity = 8").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.listen().to_string(), "0.0.0.0:7000");
        assert_eq!(config.history_capacity(), 8);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/metro.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn parse_error_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "listen = [not toml").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn invalid_values_rejected_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_capacity = 0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
