//! service::seed
//!
//! Seed data applied through the façade at startup.
//!
//! The graph store always starts empty; demo or bootstrap data lives in an
//! external JSON file and is replayed as ordinary requests, so seeding obeys
//! exactly the same validation and history rules as live traffic.
//!
//! # Format
//!
//! ```json
//! {
//!   "stations": [{"id": 1, "name": "Central Station"}],
//!   "routes": [{"source": 1, "dest": 2, "weight": 5}]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{Request, Service};

/// Errors from seed loading and application.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("seed entry rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedStation {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRoute {
    pub source: u64,
    pub dest: u64,
    pub weight: i64,
}

/// Parsed seed file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedData {
    pub stations: Vec<SeedStation>,
    pub routes: Vec<SeedRoute>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|e| SeedError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Replay the seed through the façade, stations first.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Rejected` on the first entry the façade refuses
    /// (bad name, bad weight, route to a missing station).
    pub fn apply(&self, service: &Service) -> Result<(), SeedError> {
        for station in &self.stations {
            let envelope = service.apply(Request::AddStation {
                id: station.id,
                name: station.name.clone(),
            });
            if let Some(error) = envelope.error() {
                return Err(SeedError::Rejected(format!(
                    "station {}: {}",
                    station.id, error.message
                )));
            }
        }
        for route in &self.routes {
            let envelope = service.apply(Request::AddRoute {
                source: route.source,
                dest: route.dest,
                weight: route.weight,
            });
            if let Some(error) = envelope.error() {
                return Err(SeedError::Rejected(format!(
                    "route {} -> {}: {}",
                    route.source, route.dest, error.message
                )));
            }
        }
        Ok(())
    }
}
