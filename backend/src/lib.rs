//! Trailhead backend: a trail catalogue service with waypoints, trail
//! activity logs, and authentication delegated to an external identity
//! provider.
//!
//! The crate follows a hexagonal layout: `domain` holds the entities and
//! port traits, `inbound` the HTTP adapter, `outbound` the PostgreSQL and
//! identity-provider adapters, and `server` the assembly that `main` runs.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
