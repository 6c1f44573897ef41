//! core::network
//!
//! The graph store: stations and weighted directed routes.
//!
//! # Architecture
//!
//! [`Network`] is the single source of truth for the transit graph. It is a
//! directed multigraph: nodes are stations keyed by caller-assigned ids,
//! edges are weighted routes, and parallel routes between the same ordered
//! pair of stations are permitted and preserved.
//!
//! Stations and routes are stored in insertion order so that listings are
//! stable against the literal request sequence that produced them. An id
//! index provides O(1) station lookup; adjacency is derived on demand by the
//! path and traversal engines, which only ever read the store.
//!
//! # Invariants
//!
//! - Every route's endpoints reference stations currently in the store;
//!   removing a station cascades to every route touching it, so no orphan
//!   edge survives any mutation.
//! - Every mutation validates before it applies; a failed call leaves the
//!   store untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use super::types::{Fingerprint, RouteWeight, StationId, StationName};

/// Errors from graph store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A referenced station does not exist.
    #[error("no such station: {0}")]
    NoSuchStation(StationId),

    /// No route exists between the given ordered pair.
    ///
    /// The endpoint fields avoid the name `source`, which thiserror would
    /// otherwise claim as the error's cause.
    #[error("no such route: {from} -> {to}")]
    NoSuchRoute { from: StationId, to: StationId },
}

/// A transit stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: StationName,
}

/// A weighted directed edge between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub source: StationId,
    pub dest: StationId,
    pub weight: RouteWeight,
}

/// In-memory transit network graph.
///
/// # Example
///
/// ```
/// use metrograph::core::network::Network;
/// use metrograph::core::types::{RouteWeight, StationId, StationName};
///
/// let mut net = Network::new();
/// net.add_station(StationId::new(1), StationName::new("Central").unwrap());
/// net.add_station(StationId::new(2), StationName::new("North").unwrap());
/// net.add_route(StationId::new(1), StationId::new(2), RouteWeight::new(5).unwrap())
///     .unwrap();
///
/// assert_eq!(net.station_count(), 2);
/// assert_eq!(net.route_count(), 1);
///
/// // Removing a station cascades to its routes
/// let cascaded = net.remove_station(StationId::new(1)).unwrap();
/// assert_eq!(cascaded, 1);
/// assert_eq!(net.route_count(), 0);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Network {
    /// Stations in insertion order.
    stations: Vec<Station>,
    /// Station id -> index into `stations`.
    index: HashMap<StationId, usize>,
    /// Routes in insertion order.
    routes: Vec<Route>,
}

impl Network {
    /// Create an empty network.
    ///
    /// The store always starts empty; seed data is applied by an external
    /// initializer, never embedded here.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station, or overwrite the name of an existing one.
    ///
    /// Returns the prior name when the id was already present, for audit.
    /// Overwriting never creates a duplicate entry and keeps the station's
    /// original position in insertion order.
    pub fn add_station(&mut self, id: StationId, name: StationName) -> Option<StationName> {
        match self.index.get(&id) {
            Some(&pos) => {
                let prior = std::mem::replace(&mut self.stations[pos].name, name);
                Some(prior)
            }
            None => {
                self.index.insert(id, self.stations.len());
                self.stations.push(Station { id, name });
                None
            }
        }
    }

    /// Remove a station and cascade-delete every route touching it.
    ///
    /// Returns the number of cascaded routes.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::NoSuchStation` if the id is absent; the store
    /// is left untouched in that case.
    pub fn remove_station(&mut self, id: StationId) -> Result<usize, NetworkError> {
        let pos = *self
            .index
            .get(&id)
            .ok_or(NetworkError::NoSuchStation(id))?;

        self.stations.remove(pos);
        self.index.remove(&id);
        // Positions after the removed station shift down by one.
        for idx in self.index.values_mut() {
            if *idx > pos {
                *idx -= 1;
            }
        }

        let before = self.routes.len();
        self.routes.retain(|r| r.source != id && r.dest != id);
        Ok(before - self.routes.len())
    }

    /// Append a route.
    ///
    /// Parallel routes between the same ordered pair are permitted; each call
    /// appends a new edge.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::NoSuchStation` if either endpoint is absent
    /// (source is checked first). Weight positivity is enforced by
    /// [`RouteWeight`] at construction, so no weight check happens here.
    pub fn add_route(
        &mut self,
        source: StationId,
        dest: StationId,
        weight: RouteWeight,
    ) -> Result<(), NetworkError> {
        if !self.contains_station(source) {
            return Err(NetworkError::NoSuchStation(source));
        }
        if !self.contains_station(dest) {
            return Err(NetworkError::NoSuchStation(dest));
        }
        self.routes.push(Route {
            source,
            dest,
            weight,
        });
        Ok(())
    }

    /// Remove every route from `source` to `dest`, including parallel edges.
    ///
    /// Returns the number of routes removed (at least 1 on success).
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::NoSuchRoute` if no matching route exists.
    pub fn remove_route(
        &mut self,
        source: StationId,
        dest: StationId,
    ) -> Result<usize, NetworkError> {
        let before = self.routes.len();
        self.routes
            .retain(|r| !(r.source == source && r.dest == dest));
        let removed = before - self.routes.len();
        if removed == 0 {
            return Err(NetworkError::NoSuchRoute {
                from: source,
                to: dest,
            });
        }
        Ok(removed)
    }

    /// Check whether a station exists.
    pub fn contains_station(&self, id: StationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get a station's display name.
    pub fn station_name(&self, id: StationId) -> Option<&StationName> {
        self.index.get(&id).map(|&pos| &self.stations[pos].name)
    }

    /// Stations in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Outgoing neighbors of a station as (dest, weight) pairs.
    ///
    /// Derived from the route list; parallel edges appear once each. Callers
    /// that need deterministic visitation order sort the result themselves.
    pub fn neighbors_out(&self, id: StationId) -> Vec<(StationId, RouteWeight)> {
        self.routes
            .iter()
            .filter(|r| r.source == id)
            .map(|r| (r.dest, r.weight))
            .collect()
    }

    /// Incoming neighbors of a station as (source, weight) pairs.
    pub fn neighbors_in(&self, id: StationId) -> Vec<(StationId, RouteWeight)> {
        self.routes
            .iter()
            .filter(|r| r.dest == id)
            .map(|r| (r.source, r.weight))
            .collect()
    }

    /// Compute the fingerprint of the current state.
    pub fn fingerprint(&self) -> Fingerprint {
        let stations: Vec<_> = self
            .stations
            .iter()
            .map(|s| (s.id, s.name.as_str().to_string()))
            .collect();
        let routes: Vec<_> = self
            .routes
            .iter()
            .map(|r| (r.source, r.dest, r.weight.get()))
            .collect();
        Fingerprint::compute(&stations, &routes)
    }
}
