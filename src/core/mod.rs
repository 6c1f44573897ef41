//! core
//!
//! Domain types and engines: the graph store, path and traversal engines,
//! mutation history, and configuration.
//!
//! Everything in this module is pure in-process logic with no I/O (the one
//! exception is [`config`], which reads the config file). The engines take a
//! read-only [`network::Network`] reference and never mutate it.

pub mod config;
pub mod history;
pub mod network;
pub mod path;
pub mod traverse;
pub mod types;

pub use history::{MutationHistory, MutationKind, MutationRecord};
pub use network::{Network, NetworkError, Route, Station};
pub use path::{shortest_path, PathResult};
pub use traverse::{bfs, dfs};
pub use types::{Fingerprint, RouteWeight, StationId, StationName, TypeError};
