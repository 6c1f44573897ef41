//! service
//!
//! The request façade: translates decoded operations into graph store,
//! path-engine, and traversal-engine calls, records mutations, and shapes
//! the uniform response envelope.
//!
//! # Architecture
//!
//! [`Service`] owns the shared state (network + mutation history) behind a
//! single reader/writer lock:
//!
//! - Mutations hold the write lock for the whole operation, including the
//!   history record, so a failed call can never leak a half-applied state
//!   and no query observes a mutation mid-flight.
//! - Queries (listings, shortest path, traversals) hold the read lock for
//!   the whole computation and may run concurrently with each other.
//!
//! No lock is held across I/O or `await` points, so no deadlock cycle is
//! possible.
//!
//! The façade contains no algorithmic logic: each request maps to exactly
//! one core call.
//!
//! # Example
//!
//! ```
//! use metrograph::service::{Request, Service};
//!
//! let service = Service::new(16);
//! let envelope = service.apply(Request::AddStation {
//!     id: 1,
//!     name: "Central".into(),
//! });
//! assert!(envelope.is_success());
//! ```

pub mod request;
pub mod response;
pub mod seed;

pub use request::Request;
pub use response::{Envelope, ErrorBody, ErrorCode, Payload};
pub use seed::SeedData;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::history::{MutationHistory, MutationKind};
use crate::core::network::Network;
use crate::core::types::{RouteWeight, StationId, StationName};
use crate::core::{path, traverse};

/// Shared service state: the graph store plus its mutation history.
#[derive(Debug)]
struct State {
    network: Network,
    history: MutationHistory,
}

/// The request façade. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct Service {
    state: Arc<RwLock<State>>,
}

impl Service {
    /// Create a service with an empty network and the given history
    /// capacity.
    pub fn new(history_capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                network: Network::new(),
                history: MutationHistory::new(history_capacity),
            })),
        }
    }

    /// Apply one operation and produce its envelope. Never panics.
    pub fn apply(&self, request: Request) -> Envelope {
        match request {
            Request::AddStation { id, name } => self.add_station(StationId::new(id), name),
            Request::RemoveStation { id } => self.remove_station(StationId::new(id)),
            Request::AddRoute {
                source,
                dest,
                weight,
            } => self.add_route(StationId::new(source), StationId::new(dest), weight),
            Request::RemoveRoute { source, dest } => {
                self.remove_route(StationId::new(source), StationId::new(dest))
            }
            Request::ListStations => {
                let state = self.read();
                Envelope::success(Payload::Stations {
                    stations: state.network.stations().to_vec(),
                })
            }
            Request::ListRoutes => {
                let state = self.read();
                Envelope::success(Payload::Routes {
                    routes: state.network.routes().to_vec(),
                })
            }
            Request::ShortestPath { start, end } => {
                let state = self.read();
                match path::shortest_path(
                    &state.network,
                    StationId::new(start),
                    StationId::new(end),
                ) {
                    Ok(path::PathResult::Found { path, distance }) => {
                        Envelope::success(Payload::Path {
                            reachable: true,
                            path: Some(path),
                            distance: Some(distance),
                        })
                    }
                    Ok(path::PathResult::Unreachable) => Envelope::success(Payload::Path {
                        reachable: false,
                        path: None,
                        distance: None,
                    }),
                    Err(err) => Envelope::failure(err),
                }
            }
            Request::Bfs { start } => {
                let state = self.read();
                match traverse::bfs(&state.network, StationId::new(start)) {
                    Ok(order) => Envelope::success(Payload::Traversal { order }),
                    Err(err) => Envelope::failure(err),
                }
            }
            Request::Dfs { start } => {
                let state = self.read();
                match traverse::dfs(&state.network, StationId::new(start)) {
                    Ok(order) => Envelope::success(Payload::Traversal { order }),
                    Err(err) => Envelope::failure(err),
                }
            }
            Request::History { n } => {
                let state = self.read();
                Envelope::success(Payload::History {
                    entries: state.history.recent(n),
                })
            }
            Request::Status => {
                let state = self.read();
                Envelope::success(Payload::Status {
                    stations: state.network.station_count(),
                    routes: state.network.route_count(),
                    history: state.history.len(),
                    fingerprint: state.network.fingerprint().to_string(),
                })
            }
        }
    }

    /// Decode one JSON line and apply it.
    ///
    /// A decode failure becomes a `bad_request` envelope; the process never
    /// crashes on malformed input.
    pub fn apply_json(&self, line: &str) -> Envelope {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.apply(request),
            Err(err) => Envelope::bad_request(format!("malformed request: {err}")),
        }
    }

    fn add_station(&self, id: StationId, name: String) -> Envelope {
        let name = match StationName::new(name) {
            Ok(name) => name,
            Err(err) => return Envelope::failure(err),
        };
        let mut state = self.write();
        let replaced = state.network.add_station(id, name);
        state.history.push(MutationKind::AddStation, vec![id]);
        Envelope::success(Payload::StationAdded {
            replaced: replaced.map(|n| n.as_str().to_string()),
        })
    }

    fn remove_station(&self, id: StationId) -> Envelope {
        let mut state = self.write();
        match state.network.remove_station(id) {
            Ok(cascaded_routes) => {
                state.history.push(MutationKind::RemoveStation, vec![id]);
                Envelope::success(Payload::StationRemoved { cascaded_routes })
            }
            Err(err) => Envelope::failure(err),
        }
    }

    fn add_route(&self, source: StationId, dest: StationId, weight: i64) -> Envelope {
        let weight = match RouteWeight::new(weight) {
            Ok(weight) => weight,
            Err(err) => return Envelope::failure(err),
        };
        let mut state = self.write();
        match state.network.add_route(source, dest, weight) {
            Ok(()) => {
                state
                    .history
                    .push(MutationKind::AddRoute, vec![source, dest]);
                Envelope::success(Payload::RouteAdded {})
            }
            Err(err) => Envelope::failure(err),
        }
    }

    fn remove_route(&self, source: StationId, dest: StationId) -> Envelope {
        let mut state = self.write();
        match state.network.remove_route(source, dest) {
            Ok(removed) => {
                state
                    .history
                    .push(MutationKind::RemoveRoute, vec![source, dest]);
                Envelope::success(Payload::RouteRemoved { removed })
            }
            Err(err) => Envelope::failure(err),
        }
    }

    // The lock is only ever held by non-panicking code; if it is poisoned
    // anyway, the inner state is still consistent (mutations validate before
    // applying), so recover it rather than crash the service.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
