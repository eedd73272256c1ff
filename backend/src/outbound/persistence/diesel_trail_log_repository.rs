//! PostgreSQL-backed `TrailLogRepository` implementation using Diesel.
//!
//! The table is append-only at this layer: only inserts and per-trail reads
//! are implemented, matching the port.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::TrailLog;
use crate::domain::ports::{TrailLogRepository, TrailLogRepositoryError};

use super::models::{NewTrailLogRow, TrailLogRow};
use super::pool::{DbPool, PoolError};
use super::schema::trail_logs;

/// Diesel-backed implementation of the `TrailLogRepository` port.
#[derive(Clone)]
pub struct DieselTrailLogRepository {
    pool: DbPool,
}

impl DieselTrailLogRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TrailLogRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TrailLogRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> TrailLogRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            match kind {
                DatabaseErrorKind::ForeignKeyViolation | DatabaseErrorKind::NotNullViolation => {
                    TrailLogRepositoryError::constraint(info.message().to_owned())
                }
                DatabaseErrorKind::ClosedConnection => {
                    TrailLogRepositoryError::connection("database connection error")
                }
                _ => TrailLogRepositoryError::query("database error"),
            }
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            TrailLogRepositoryError::query("database error")
        }
    }
}

#[async_trait]
impl TrailLogRepository for DieselTrailLogRepository {
    async fn record(
        &self,
        trail_id: i32,
        author_id: i32,
    ) -> Result<TrailLog, TrailLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TrailLogRow = diesel::insert_into(trail_logs::table)
            .values(NewTrailLogRow {
                trail_id,
                author_id,
            })
            .returning(TrailLogRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(TrailLog::from(row))
    }

    async fn list_for_trail(
        &self,
        trail_id: i32,
    ) -> Result<Vec<TrailLog>, TrailLogRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TrailLogRow> = trail_logs::table
            .filter(trail_logs::trail_id.eq(trail_id))
            .order(trail_logs::id.asc())
            .select(TrailLogRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(TrailLog::from).collect())
    }
}
