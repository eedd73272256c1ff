//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod authenticator;
mod trail_log_repository;
mod trail_repository;
mod waypoint_repository;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::{Authenticator, AuthenticatorError, FixtureAuthenticator};
#[cfg(test)]
pub use trail_log_repository::MockTrailLogRepository;
pub use trail_log_repository::{
    FixtureTrailLogRepository, TrailLogRepository, TrailLogRepositoryError,
};
#[cfg(test)]
pub use trail_repository::MockTrailRepository;
pub use trail_repository::{FixtureTrailRepository, TrailRepository, TrailRepositoryError};
#[cfg(test)]
pub use waypoint_repository::MockWaypointRepository;
pub use waypoint_repository::{
    FixtureWaypointRepository, WaypointRepository, WaypointRepositoryError,
};
