//! Port for waypoint reads.
//!
//! Waypoints are read-only through the HTTP surface; the port mirrors that by
//! exposing only a per-trail listing.

use async_trait::async_trait;

use crate::domain::Waypoint;

use super::define_port_error;

define_port_error! {
    /// Errors raised by waypoint repository adapters.
    pub enum WaypointRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "waypoint repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "waypoint repository query failed: {message}",
    }
}

/// Port for waypoint retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WaypointRepository: Send + Sync {
    /// Waypoints for one trail. An unknown trail id yields an empty vec, not
    /// an error.
    async fn list_for_trail(&self, trail_id: i32)
    -> Result<Vec<Waypoint>, WaypointRepositoryError>;
}

/// Fixture implementation returning no waypoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureWaypointRepository;

#[async_trait]
impl WaypointRepository for FixtureWaypointRepository {
    async fn list_for_trail(
        &self,
        _trail_id: i32,
    ) -> Result<Vec<Waypoint>, WaypointRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_listing_is_empty_not_an_error() {
        let repo = FixtureWaypointRepository;
        let waypoints = repo.list_for_trail(42).await.expect("list");
        assert!(waypoints.is_empty());
    }
}
