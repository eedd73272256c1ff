//! Port for the append-only trail log.
//!
//! Logs carry no update or delete operation by design: the only write is the
//! append performed when a trail is created.

use async_trait::async_trait;

use crate::domain::TrailLog;

use super::define_port_error;

define_port_error! {
    /// Errors raised by trail log repository adapters.
    pub enum TrailLogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "trail log repository connection failed: {message}",
        /// Query or append failed during execution.
        Query { message: String } =>
            "trail log repository query failed: {message}",
        /// A database constraint rejected the append.
        Constraint { message: String } =>
            "trail log repository constraint violation: {message}",
    }
}

/// Port for trail log storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrailLogRepository: Send + Sync {
    /// Append one activity record; storage assigns the id and timestamp.
    async fn record(
        &self,
        trail_id: i32,
        author_id: i32,
    ) -> Result<TrailLog, TrailLogRepositoryError>;

    /// Activity records for one trail, oldest first. An unknown trail id
    /// yields an empty vec.
    async fn list_for_trail(&self, trail_id: i32)
    -> Result<Vec<TrailLog>, TrailLogRepositoryError>;
}

/// Fixture implementation that discards appends and lists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTrailLogRepository;

#[async_trait]
impl TrailLogRepository for FixtureTrailLogRepository {
    async fn record(
        &self,
        trail_id: i32,
        author_id: i32,
    ) -> Result<TrailLog, TrailLogRepositoryError> {
        Ok(TrailLog {
            id: 1,
            trail_id,
            author_id,
            recorded_at: chrono::Utc::now(),
        })
    }

    async fn list_for_trail(
        &self,
        _trail_id: i32,
    ) -> Result<Vec<TrailLog>, TrailLogRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_record_reflects_the_requested_link() {
        let repo = FixtureTrailLogRepository;
        let log = repo.record(3, 7).await.expect("record");
        assert_eq!(log.trail_id, 3);
        assert_eq!(log.author_id, 7);
    }
}
