//! Metrograph - an in-memory transit network graph service
//!
//! Metrograph maintains a directed multigraph of stations and weighted
//! routes, answers deterministic shortest-path and traversal queries over
//! it, and keeps a bounded audit log of mutations. It speaks a
//! newline-delimited JSON protocol with a uniform success/failure envelope.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates)
//! - [`service`] - Request façade: one request, one core call, one envelope
//! - [`core`] - Domain types, graph store, path/traversal engines, history
//! - [`server`] - NDJSON-over-TCP service loop
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. Every route's endpoints reference stations currently in the store;
//!    no orphan edge survives any mutation
//! 2. Every mutation validates before it applies and is serialized against
//!    queries, so no computation observes a half-applied state
//! 3. Query results are deterministic: traversal orders and equal-weight
//!    path tie-breaks are fixed by station id
//! 4. No request can crash the process; failures are structured envelopes

pub mod cli;
pub mod core;
pub mod server;
pub mod service;
pub mod ui;
