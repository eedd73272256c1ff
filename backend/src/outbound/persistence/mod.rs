//! PostgreSQL persistence adapters backing the domain repository ports.

mod diesel_trail_log_repository;
mod diesel_trail_repository;
mod diesel_waypoint_repository;
mod migrations;
mod models;
mod pool;
pub(crate) mod schema;

pub use diesel_trail_log_repository::DieselTrailLogRepository;
pub use diesel_trail_repository::DieselTrailRepository;
pub use diesel_waypoint_repository::DieselWaypointRepository;
pub use migrations::{MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
