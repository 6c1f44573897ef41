//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`StationId`] - Caller-assigned integer station identifier
//! - [`StationName`] - Validated display name for a station
//! - [`RouteWeight`] - Strictly positive route cost
//! - [`Fingerprint`] - Network state hash for audit and change detection
//!
//! # Validation
//!
//! These types enforce validity at construction time. A weight of zero or a
//! blank station name cannot be represented, so the graph store never has to
//! re-check them.
//!
//! # Examples
//!
//! ```
//! use metrograph::core::types::{RouteWeight, StationName};
//!
//! // Valid constructions
//! let name = StationName::new("Central Station").unwrap();
//! let weight = RouteWeight::new(5).unwrap();
//! assert_eq!(weight.get(), 5);
//!
//! // Invalid constructions fail at creation time
//! assert!(StationName::new("   ").is_err());
//! assert!(RouteWeight::new(0).is_err());
//! assert!(RouteWeight::new(-3).is_err());
//! ```

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid station name: {0}")]
    InvalidStationName(String),

    #[error("invalid route weight: {0} (must be positive)")]
    InvalidWeight(i64),
}

/// A caller-assigned station identifier.
///
/// Ids are opaque to the engine; the caller owns the numbering scheme.
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Create a station id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for StationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated station display name.
///
/// Names must contain at least one non-whitespace character. Surrounding
/// whitespace is preserved as given; only fully blank names are rejected.
///
/// # Example
///
/// ```
/// use metrograph::core::types::StationName;
///
/// let name = StationName::new("North Terminal").unwrap();
/// assert_eq!(name.as_str(), "North Terminal");
///
/// assert!(StationName::new("").is_err());
/// assert!(StationName::new(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationName(String);

impl StationName {
    /// Create a new validated station name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidStationName` if the name is empty or
    /// contains only whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TypeError::InvalidStationName(
                "station name cannot be blank".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<StationName> for String {
    fn from(name: StationName) -> Self {
        name.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive route weight (cost or distance).
///
/// Weights enter the system as signed integers from external requests and are
/// validated here, so the path engine only ever sees positive costs and the
/// no-negative-edge precondition of Dijkstra holds by construction.
///
/// # Example
///
/// ```
/// use metrograph::core::types::RouteWeight;
///
/// let w = RouteWeight::new(7).unwrap();
/// assert_eq!(w.get(), 7);
///
/// assert!(RouteWeight::new(0).is_err());
/// assert!(RouteWeight::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct RouteWeight(u64);

impl RouteWeight {
    /// Create a new validated route weight.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidWeight` if the weight is zero or negative.
    pub fn new(weight: i64) -> Result<Self, TypeError> {
        if weight <= 0 {
            return Err(TypeError::InvalidWeight(weight));
        }
        Ok(Self(weight as u64))
    }

    /// Get the weight value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for RouteWeight {
    type Error = TypeError;

    fn try_from(w: i64) -> Result<Self, Self::Error> {
        Self::new(w)
    }
}

impl From<RouteWeight> for u64 {
    fn from(w: RouteWeight) -> Self {
        w.0
    }
}

impl std::fmt::Display for RouteWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stable hash over network state for audit and change detection.
///
/// The fingerprint is computed over a canonical ordering of stations and
/// routes, so two networks with the same contents produce the same value
/// regardless of insertion order.
///
/// # Example
///
/// ```
/// use metrograph::core::types::{Fingerprint, StationId};
///
/// let stations = vec![(StationId::new(1), "Central".to_string())];
/// let routes: Vec<(StationId, StationId, u64)> = vec![];
///
/// let fp = Fingerprint::compute(&stations, &routes);
/// assert_eq!(fp, Fingerprint::compute(&stations, &routes));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute a fingerprint from station and route snapshots.
    ///
    /// Stations are sorted by id and routes by (source, dest, weight) before
    /// hashing to ensure determinism regardless of insertion order.
    pub fn compute(
        stations: &[(StationId, String)],
        routes: &[(StationId, StationId, u64)],
    ) -> Self {
        let mut stations: Vec<_> = stations.iter().collect();
        stations.sort_by_key(|(id, _)| *id);

        let mut routes: Vec<_> = routes.iter().collect();
        routes.sort();

        let mut hasher = Sha256::new();
        for (id, name) in stations {
            hasher.update(id.get().to_be_bytes());
            hasher.update(name.as_bytes());
            hasher.update(b"\0");
        }
        hasher.update(b"\n");
        for (source, dest, weight) in routes {
            hasher.update(source.get().to_be_bytes());
            hasher.update(dest.get().to_be_bytes());
            hasher.update(weight.to_be_bytes());
        }

        let result = hasher.finalize();
        Self(hex::encode(result))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod station_name {
        use super::*;

        #[test]
        fn valid_names() {
            assert!(StationName::new("Central").is_ok());
            assert!(StationName::new("North Terminal").is_ok());
            assert!(StationName::new("Gare de l'Est").is_ok());
            assert!(StationName::new("駅").is_ok());
        }

        #[test]
        fn empty_rejected() {
            assert!(StationName::new("").is_err());
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(StationName::new("   ").is_err());
            assert!(StationName::new("\t\n").is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let name = StationName::new("Central Station").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            let parsed: StationName = serde_json::from_str(&json).unwrap();
            assert_eq!(name, parsed);
        }

        #[test]
        fn serde_rejects_blank() {
            assert!(serde_json::from_str::<StationName>("\"  \"").is_err());
        }
    }

    mod route_weight {
        use super::*;

        #[test]
        fn positive_accepted() {
            assert_eq!(RouteWeight::new(1).unwrap().get(), 1);
            assert_eq!(RouteWeight::new(i64::MAX).unwrap().get(), i64::MAX as u64);
        }

        #[test]
        fn zero_rejected() {
            assert_eq!(RouteWeight::new(0), Err(TypeError::InvalidWeight(0)));
        }

        #[test]
        fn negative_rejected() {
            assert_eq!(RouteWeight::new(-5), Err(TypeError::InvalidWeight(-5)));
        }

        #[test]
        fn serde_rejects_nonpositive() {
            assert!(serde_json::from_str::<RouteWeight>("0").is_err());
            assert!(serde_json::from_str::<RouteWeight>("-2").is_err());
            assert_eq!(
                serde_json::from_str::<RouteWeight>("9").unwrap(),
                RouteWeight::new(9).unwrap()
            );
        }
    }

    mod station_id {
        use super::*;

        #[test]
        fn transparent_serde() {
            let id = StationId::new(42);
            assert_eq!(serde_json::to_string(&id).unwrap(), "42");
            let parsed: StationId = serde_json::from_str("42").unwrap();
            assert_eq!(parsed, id);
        }

        #[test]
        fn ordering_by_value() {
            assert!(StationId::new(1) < StationId::new(2));
        }
    }

    mod fingerprint {
        use super::*;

        fn station(id: u64, name: &str) -> (StationId, String) {
            (StationId::new(id), name.to_string())
        }

        #[test]
        fn deterministic() {
            let stations = vec![station(1, "Central"), station(2, "North")];
            let routes = vec![(StationId::new(1), StationId::new(2), 5)];
            assert_eq!(
                Fingerprint::compute(&stations, &routes),
                Fingerprint::compute(&stations, &routes)
            );
        }

        #[test]
        fn order_independent() {
            let a = vec![station(1, "Central"), station(2, "North")];
            let b = vec![station(2, "North"), station(1, "Central")];
            let routes = vec![];
            assert_eq!(
                Fingerprint::compute(&a, &routes),
                Fingerprint::compute(&b, &routes)
            );
        }

        #[test]
        fn different_state_different_fingerprint() {
            let a = vec![station(1, "Central")];
            let b = vec![station(1, "Renamed")];
            let routes = vec![];
            assert_ne!(
                Fingerprint::compute(&a, &routes),
                Fingerprint::compute(&b, &routes)
            );
        }

        #[test]
        fn routes_affect_fingerprint() {
            let stations = vec![station(1, "Central"), station(2, "North")];
            let none = vec![];
            let one = vec![(StationId::new(1), StationId::new(2), 5)];
            assert_ne!(
                Fingerprint::compute(&stations, &none),
                Fingerprint::compute(&stations, &one)
            );
        }

        #[test]
        fn empty_state_has_fingerprint() {
            let fp = Fingerprint::compute(&[], &[]);
            assert!(!fp.as_str().is_empty());
        }
    }
}
