//! PostgreSQL-backed `TrailRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TrailRepository, TrailRepositoryError};
use crate::domain::{NewTrail, Trail, TrailChanges};

use super::models::{NewTrailRow, TrailChangeset, TrailRow};
use super::pool::{DbPool, PoolError};
use super::schema::trails;

/// Diesel-backed implementation of the `TrailRepository` port.
#[derive(Clone)]
pub struct DieselTrailRepository {
    pool: DbPool,
}

impl DieselTrailRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TrailRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TrailRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to the port's taxonomy. Constraint violations stay
/// distinguishable so callers can tell an unknown author from a broken
/// connection.
fn map_diesel_error(error: diesel::result::Error) -> TrailRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            match kind {
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation => {
                    TrailRepositoryError::constraint(info.message().to_owned())
                }
                DatabaseErrorKind::ClosedConnection => {
                    TrailRepositoryError::connection("database connection error")
                }
                _ => TrailRepositoryError::query("database error"),
            }
        }
        DieselError::NotFound => TrailRepositoryError::query("record not found"),
        other => {
            debug!(error = %other, "diesel operation failed");
            TrailRepositoryError::query("database error")
        }
    }
}

fn changeset<'a>(changes: &'a TrailChanges) -> TrailChangeset<'a> {
    TrailChangeset {
        title: changes.title.as_deref(),
        overview: changes.overview.as_deref(),
        distance: changes.distance,
        complexity: changes.complexity.as_deref(),
    }
}

#[async_trait]
impl TrailRepository for DieselTrailRepository {
    async fn list(&self) -> Result<Vec<Trail>, TrailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TrailRow> = trails::table
            .order(trails::id.asc())
            .select(TrailRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Trail::from).collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Trail>, TrailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TrailRow> = trails::table
            .filter(trails::id.eq(id))
            .select(TrailRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Trail::from))
    }

    async fn create(&self, new_trail: &NewTrail) -> Result<Trail, TrailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTrailRow {
            title: &new_trail.title,
            overview: new_trail.overview.as_deref(),
            distance: new_trail.distance,
            complexity: &new_trail.complexity,
            author_id: new_trail.author_id,
        };

        let row: TrailRow = diesel::insert_into(trails::table)
            .values(&new_row)
            .returning(TrailRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Trail::from(row))
    }

    async fn update(
        &self,
        id: i32,
        changes: &TrailChanges,
    ) -> Result<Option<Trail>, TrailRepositoryError> {
        // Diesel rejects an empty changeset, and a field-free update is a
        // plain lookup anyway.
        if changes.is_empty() {
            return self.find(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TrailRow> = diesel::update(trails::table.filter(trails::id.eq(id)))
            .set(&changeset(changes))
            .returning(TrailRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Trail::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, TrailRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(trails::table.filter(trails::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the non-network mapping helpers.
    use super::*;

    #[test]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, TrailRepositoryError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn not_found_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, TrailRepositoryError::Query { .. }));
    }

    #[test]
    fn foreign_key_violation_maps_to_constraint_error() {
        let err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert violates foreign key \"trails_author_id_fkey\"".to_owned()),
        ));
        assert!(matches!(err, TrailRepositoryError::Constraint { .. }));
        assert!(err.to_string().contains("trails_author_id_fkey"));
    }

    #[test]
    fn changeset_skips_omitted_fields() {
        let changes = TrailChanges {
            distance: Some(5.2),
            ..TrailChanges::default()
        };
        let set = changeset(&changes);
        assert!(set.title.is_none());
        assert!(set.overview.is_none());
        assert!(set.complexity.is_none());
        assert_eq!(set.distance, Some(5.2));
    }
}
