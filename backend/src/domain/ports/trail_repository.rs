//! Port for trail persistence.
//!
//! Adapters provide durable storage for trails. Every operation is a single
//! statement/commit; there is no cross-row batching.

use async_trait::async_trait;

use crate::domain::{NewTrail, Trail, TrailChanges};

use super::define_port_error;

define_port_error! {
    /// Errors raised by trail repository adapters.
    pub enum TrailRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "trail repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "trail repository query failed: {message}",
        /// A database constraint rejected the write, e.g. an unknown author.
        Constraint { message: String } =>
            "trail repository constraint violation: {message}",
    }
}

/// Port for trail storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrailRepository: Send + Sync {
    /// All trails, in storage (primary key) order.
    async fn list(&self) -> Result<Vec<Trail>, TrailRepositoryError>;

    /// Fetch one trail. `None` when the id is absent.
    async fn find(&self, id: i32) -> Result<Option<Trail>, TrailRepositoryError>;

    /// Insert a trail; storage assigns the id and creation timestamp.
    async fn create(&self, new_trail: &NewTrail) -> Result<Trail, TrailRepositoryError>;

    /// Partial update. `Some` fields overwrite, `None` fields are unchanged.
    /// Returns the updated row, or `None` when the id is absent.
    async fn update(
        &self,
        id: i32,
        changes: &TrailChanges,
    ) -> Result<Option<Trail>, TrailRepositoryError>;

    /// Remove a trail. Returns `false` when the id is absent.
    async fn delete(&self, id: i32) -> Result<bool, TrailRepositoryError>;
}

/// Fixture implementation for tests that do not exercise trail storage.
///
/// Lookups return `None`, listings are empty, deletes report the row as
/// absent, and creates echo the request back with fixed id `1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTrailRepository;

#[async_trait]
impl TrailRepository for FixtureTrailRepository {
    async fn list(&self) -> Result<Vec<Trail>, TrailRepositoryError> {
        Ok(Vec::new())
    }

    async fn find(&self, _id: i32) -> Result<Option<Trail>, TrailRepositoryError> {
        Ok(None)
    }

    async fn create(&self, new_trail: &NewTrail) -> Result<Trail, TrailRepositoryError> {
        Ok(Trail {
            id: 1,
            title: new_trail.title.clone(),
            overview: new_trail.overview.clone(),
            distance: new_trail.distance,
            complexity: new_trail.complexity.clone(),
            date_created: chrono::Utc::now(),
            author_id: new_trail.author_id,
        })
    }

    async fn update(
        &self,
        _id: i32,
        _changes: &TrailChanges,
    ) -> Result<Option<Trail>, TrailRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: i32) -> Result<bool, TrailRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_lookup_and_delete_report_absent_rows() {
        let repo = FixtureTrailRepository;
        assert!(repo.find(7).await.expect("find").is_none());
        assert!(!repo.delete(7).await.expect("delete"));
    }

    #[tokio::test]
    async fn fixture_create_echoes_request_fields() {
        let repo = FixtureTrailRepository;
        let created = repo
            .create(&NewTrail {
                title: "Loop".into(),
                overview: None,
                distance: Some(5.2),
                complexity: "easy".into(),
                author_id: 7,
            })
            .await
            .expect("create");
        assert_eq!(created.id, 1);
        assert_eq!(created.author_id, 7);
        assert_eq!(created.distance, Some(5.2));
    }

    #[test]
    fn constraint_error_formats_with_context() {
        let err = TrailRepositoryError::constraint("missing author");
        assert!(err.to_string().contains("missing author"));
    }
}
