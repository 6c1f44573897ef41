//! Property-based tests for the graph store and engines.
//!
//! These tests use proptest to verify invariants hold across randomly
//! generated mutation sequences and network shapes.

use std::collections::HashSet;

use proptest::prelude::*;

use metrograph::core::history::{MutationHistory, MutationKind};
use metrograph::core::network::Network;
use metrograph::core::path::{shortest_path, PathResult};
use metrograph::core::traverse::{bfs, dfs};
use metrograph::core::types::{RouteWeight, StationId, StationName};

/// A single graph store mutation over a small id space.
#[derive(Debug, Clone)]
enum Op {
    AddStation(u64),
    RemoveStation(u64),
    AddRoute(u64, u64, i64),
    RemoveRoute(u64, u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..8).prop_map(Op::AddStation),
        (0u64..8).prop_map(Op::RemoveStation),
        (0u64..8, 0u64..8, 1i64..20).prop_map(|(a, b, w)| Op::AddRoute(a, b, w)),
        (0u64..8, 0u64..8).prop_map(|(a, b)| Op::RemoveRoute(a, b)),
    ]
}

/// Apply an op, ignoring domain failures (absent stations etc.) — failures
/// must leave the store untouched, which the invariant checks confirm.
fn apply(net: &mut Network, op: &Op) {
    match *op {
        Op::AddStation(id) => {
            let name = StationName::new(format!("S{id}")).expect("valid name");
            net.add_station(StationId::new(id), name);
        }
        Op::RemoveStation(id) => {
            let _ = net.remove_station(StationId::new(id));
        }
        Op::AddRoute(a, b, w) => {
            let weight = RouteWeight::new(w).expect("strategy yields positive weights");
            let _ = net.add_route(StationId::new(a), StationId::new(b), weight);
        }
        Op::RemoveRoute(a, b) => {
            let _ = net.remove_route(StationId::new(a), StationId::new(b));
        }
    }
}

fn build(ops: &[Op]) -> Network {
    let mut net = Network::new();
    for op in ops {
        apply(&mut net, op);
    }
    net
}

proptest! {
    /// No mutation sequence can leave a route referencing an absent station.
    #[test]
    fn no_orphan_edges(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for route in net.routes() {
            prop_assert!(net.contains_station(route.source));
            prop_assert!(net.contains_station(route.dest));
        }
    }

    /// Station listings never contain duplicate ids, regardless of how often
    /// an id was re-added.
    #[test]
    fn no_duplicate_stations(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        let ids: Vec<_> = net.stations().iter().map(|s| s.id).collect();
        let distinct: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), distinct.len());
    }

    /// BFS and DFS from any station agree on the reachable set.
    #[test]
    fn traversals_agree_on_membership(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for station in net.stations() {
            let b: HashSet<_> = bfs(&net, station.id).expect("station exists").into_iter().collect();
            let d: HashSet<_> = dfs(&net, station.id).expect("station exists").into_iter().collect();
            prop_assert_eq!(b, d);
        }
    }

    /// Every traversal starts at its start station and visits it first.
    #[test]
    fn traversal_starts_at_start(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for station in net.stations() {
            let order = bfs(&net, station.id).expect("station exists");
            prop_assert_eq!(order.first(), Some(&station.id));
        }
    }

    /// A direct route is an upper bound on the shortest-path distance.
    #[test]
    fn direct_edge_bounds_distance(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for route in net.routes() {
            match shortest_path(&net, route.source, route.dest).expect("endpoints exist") {
                PathResult::Found { distance, path } => {
                    prop_assert!(distance <= route.weight.get());
                    prop_assert_eq!(path.first(), Some(&route.source));
                    prop_assert_eq!(path.last(), Some(&route.dest));
                }
                PathResult::Unreachable => {
                    return Err(TestCaseError::fail("direct edge exists but unreachable"));
                }
            }
        }
    }

    /// The path to oneself is always the trivial path.
    #[test]
    fn self_path_is_trivial(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for station in net.stations() {
            let result = shortest_path(&net, station.id, station.id).expect("station exists");
            prop_assert_eq!(result, PathResult::Found { path: vec![station.id], distance: 0 });
        }
    }

    /// Shortest-path queries are deterministic.
    #[test]
    fn shortest_path_is_deterministic(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let net = build(&ops);
        for a in net.stations() {
            for b in net.stations() {
                let first = shortest_path(&net, a.id, b.id).expect("endpoints exist");
                let second = shortest_path(&net, a.id, b.id).expect("endpoints exist");
                prop_assert_eq!(first, second);
            }
        }
    }

    /// The fingerprint depends on contents, not insertion order.
    #[test]
    fn fingerprint_ignores_insertion_order(mut ids in prop::collection::hash_set(0u64..20, 1..10)) {
        let ids: Vec<_> = ids.drain().collect();
        let mut forward = Network::new();
        for &id in &ids {
            forward.add_station(StationId::new(id), StationName::new(format!("S{id}")).expect("valid"));
        }
        let mut backward = Network::new();
        for &id in ids.iter().rev() {
            backward.add_station(StationId::new(id), StationName::new(format!("S{id}")).expect("valid"));
        }
        prop_assert_eq!(forward.fingerprint(), backward.fingerprint());
    }

    /// History never exceeds capacity and keeps sequence numbers monotonic.
    #[test]
    fn history_bounded_and_monotonic(capacity in 1usize..10, pushes in 0u64..40) {
        let mut history = MutationHistory::new(capacity);
        for n in 0..pushes {
            history.push(MutationKind::AddStation, vec![StationId::new(n)]);
        }

        prop_assert!(history.len() <= capacity);
        prop_assert_eq!(history.len(), (pushes as usize).min(capacity));

        let recent = history.recent(capacity);
        for pair in recent.windows(2) {
            prop_assert_eq!(pair[0].seq, pair[1].seq + 1);
        }
        if let Some(newest) = recent.first() {
            prop_assert_eq!(newest.seq, pushes);
        }
    }
}
