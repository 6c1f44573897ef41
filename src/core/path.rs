//! core::path
//!
//! Shortest-path engine over a network snapshot.
//!
//! # Algorithm
//!
//! Dijkstra's algorithm with a binary heap, `O((V+E) log V)`. Weights are
//! positive by construction ([`RouteWeight`](super::types::RouteWeight)), so
//! no negative-edge handling exists.
//!
//! # Determinism
//!
//! When several shortest paths tie on total weight, the lexicographically
//! smallest path by station id is returned — at every hop the smallest-id
//! next station still on a shortest path is preferred. This is realized in
//! two phases: a reverse Dijkstra from the destination computes the remaining
//! distance at each station, then a greedy forward walk from the start picks
//! the smallest-id neighbor whose remaining distance proves it lies on a
//! shortest path.
//!
//! The engine never mutates the network; it reads a snapshot under the
//! caller's lock.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::network::{Network, NetworkError};
use super::types::StationId;

/// Result of a shortest-path query.
///
/// `Unreachable` is a normal negative result, distinct from the exceptional
/// `NoSuchStation` error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// A path exists.
    Found {
        /// Station ids from start to end, inclusive.
        path: Vec<StationId>,
        /// Total weight along the path.
        distance: u64,
    },
    /// The end station is not reachable from the start.
    Unreachable,
}

/// Compute the shortest path from `start` to `end`.
///
/// `start == end` yields a single-station path of distance 0. A path whose
/// total weight would overflow `u64` is not a representable distance and
/// counts as no path at all.
///
/// # Errors
///
/// Returns `NetworkError::NoSuchStation` if either endpoint is absent
/// (start is checked first).
///
/// # Example
///
/// ```
/// use metrograph::core::network::Network;
/// use metrograph::core::path::{shortest_path, PathResult};
/// use metrograph::core::types::{RouteWeight, StationId, StationName};
///
/// let mut net = Network::new();
/// for (id, name) in [(1, "Central"), (2, "North"), (3, "South")] {
///     net.add_station(StationId::new(id), StationName::new(name).unwrap());
/// }
/// net.add_route(StationId::new(1), StationId::new(2), RouteWeight::new(5).unwrap())
///     .unwrap();
/// net.add_route(StationId::new(1), StationId::new(3), RouteWeight::new(7).unwrap())
///     .unwrap();
///
/// let result = shortest_path(&net, StationId::new(1), StationId::new(3)).unwrap();
/// assert_eq!(
///     result,
///     PathResult::Found {
///         path: vec![StationId::new(1), StationId::new(3)],
///         distance: 7,
///     }
/// );
/// ```
pub fn shortest_path(
    net: &Network,
    start: StationId,
    end: StationId,
) -> Result<PathResult, NetworkError> {
    if !net.contains_station(start) {
        return Err(NetworkError::NoSuchStation(start));
    }
    if !net.contains_station(end) {
        return Err(NetworkError::NoSuchStation(end));
    }

    if start == end {
        return Ok(PathResult::Found {
            path: vec![start],
            distance: 0,
        });
    }

    let remaining = distances_to(net, end);
    let Some(&total) = remaining.get(&start) else {
        return Ok(PathResult::Unreachable);
    };

    // Greedy forward walk: from each station, follow the smallest-id
    // neighbor whose remaining distance certifies it is on a shortest path.
    let mut path = vec![start];
    let mut current = start;
    while current != end {
        let here = remaining[&current];
        let mut next: Option<StationId> = None;
        for (neighbor, weight) in net.neighbors_out(current) {
            let Some(&rest) = remaining.get(&neighbor) else {
                continue;
            };
            if rest.checked_add(weight.get()) == Some(here) && next.is_none_or(|n| neighbor < n) {
                next = Some(neighbor);
            }
        }
        // Distances are exact sums, so a qualifying hop exists and its
        // remaining distance is strictly smaller; the walk must terminate.
        let Some(next) = next else {
            return Ok(PathResult::Unreachable);
        };
        path.push(next);
        current = next;
    }

    Ok(PathResult::Found {
        path,
        distance: total,
    })
}

/// Reverse Dijkstra: distance from every station to `end` along route
/// direction, following incoming edges backwards.
fn distances_to(net: &Network, end: StationId) -> HashMap<StationId, u64> {
    let mut dist: HashMap<StationId, u64> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, StationId)>> = BinaryHeap::new();

    dist.insert(end, 0);
    heap.push(Reverse((0, end)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| d > best) {
            continue; // stale heap entry
        }
        for (source, weight) in net.neighbors_in(node) {
            // Totals that overflow u64 are not representable distances;
            // skipping the relaxation treats such paths as unreachable.
            let Some(candidate) = d.checked_add(weight.get()) else {
                continue;
            };
            if dist.get(&source).is_none_or(|&best| candidate < best) {
                dist.insert(source, candidate);
                heap.push(Reverse((candidate, source)));
            }
        }
    }

    dist
}
