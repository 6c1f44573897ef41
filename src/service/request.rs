//! service::request
//!
//! External operations, decoded from JSON.
//!
//! Requests carry raw primitives (names as plain strings, weights as signed
//! integers); domain validation happens in the façade so that malformed
//! values become structured failure envelopes rather than decode errors.

use serde::Deserialize;

/// A decoded external operation.
///
/// Tagged by the `op` field:
///
/// ```json
/// {"op": "add_route", "source": 1, "dest": 2, "weight": 5}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Insert or overwrite a station.
    AddStation { id: u64, name: String },
    /// Remove a station and cascade its routes.
    RemoveStation { id: u64 },
    /// Append a weighted directed route.
    AddRoute { source: u64, dest: u64, weight: i64 },
    /// Remove all routes for an ordered pair.
    RemoveRoute { source: u64, dest: u64 },
    /// List stations in insertion order.
    ListStations,
    /// List routes in insertion order.
    ListRoutes,
    /// Weighted shortest path.
    ShortestPath { start: u64, end: u64 },
    /// Breadth-first visitation order.
    Bfs { start: u64 },
    /// Depth-first visitation order.
    Dfs { start: u64 },
    /// The most recent mutation records.
    History { n: usize },
    /// Counts and state fingerprint.
    Status,
}
