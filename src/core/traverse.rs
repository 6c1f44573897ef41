//! core::traverse
//!
//! Breadth-first and depth-first traversal over a network snapshot.
//!
//! Both traversals visit unvisited neighbors in increasing station-id order,
//! so the produced orders are deterministic against the same network
//! contents. Results contain exactly the stations reachable from the start;
//! disconnected stations are absent, which is not an error.

use std::collections::{HashSet, VecDeque};

use super::network::{Network, NetworkError};
use super::types::StationId;

/// Breadth-first visitation order from `start`.
///
/// Level order; within a level, neighbors are visited in increasing id
/// order. Parallel edges do not cause duplicate visits.
///
/// # Errors
///
/// Returns `NetworkError::NoSuchStation` if the start station is absent.
pub fn bfs(net: &Network, start: StationId) -> Result<Vec<StationId>, NetworkError> {
    if !net.contains_station(start) {
        return Err(NetworkError::NoSuchStation(start));
    }

    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for neighbor in sorted_neighbors(net, current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}

/// Depth-first pre-order from `start`.
///
/// Iterative; unvisited neighbors are explored in increasing id order.
///
/// # Errors
///
/// Returns `NetworkError::NoSuchStation` if the start station is absent.
pub fn dfs(net: &Network, start: StationId) -> Result<Vec<StationId>, NetworkError> {
    if !net.contains_station(start) {
        return Err(NetworkError::NoSuchStation(start));
    }

    let mut order = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        // Push in reverse so the smallest id is popped first.
        for neighbor in sorted_neighbors(net, current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

/// Distinct outgoing neighbors in increasing id order.
fn sorted_neighbors(net: &Network, id: StationId) -> Vec<StationId> {
    let mut neighbors: Vec<StationId> = net
        .neighbors_out(id)
        .into_iter()
        .map(|(dest, _)| dest)
        .collect();
    neighbors.sort_unstable();
    neighbors.dedup();
    neighbors
}
