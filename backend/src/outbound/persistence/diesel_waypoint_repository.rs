//! PostgreSQL-backed `WaypointRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::Waypoint;
use crate::domain::ports::{WaypointRepository, WaypointRepositoryError};

use super::models::WaypointRow;
use super::pool::{DbPool, PoolError};
use super::schema::waypoints;

/// Diesel-backed implementation of the `WaypointRepository` port.
#[derive(Clone)]
pub struct DieselWaypointRepository {
    pool: DbPool,
}

impl DieselWaypointRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WaypointRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            WaypointRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> WaypointRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "diesel operation failed");
            WaypointRepositoryError::connection("database connection error")
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            WaypointRepositoryError::query("database error")
        }
    }
}

#[async_trait]
impl WaypointRepository for DieselWaypointRepository {
    async fn list_for_trail(
        &self,
        trail_id: i32,
    ) -> Result<Vec<Waypoint>, WaypointRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // A filter over an unknown trail id legitimately yields zero rows;
        // no existence check is performed.
        let rows: Vec<WaypointRow> = waypoints::table
            .filter(waypoints::trail_id.eq(trail_id))
            .order(waypoints::id.asc())
            .select(WaypointRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Waypoint::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(err, WaypointRepositoryError::Connection { .. }));
    }

    #[test]
    fn other_diesel_errors_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, WaypointRepositoryError::Query { .. }));
    }
}
