//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O. The bundle is built once
//! in `main` (or a test harness) and cloned per worker.

use std::sync::Arc;

use crate::domain::ports::{Authenticator, TrailLogRepository, TrailRepository, WaypointRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Trail storage.
    pub trails: Arc<dyn TrailRepository>,
    /// Waypoint storage (read-only surface).
    pub waypoints: Arc<dyn WaypointRepository>,
    /// Append-only activity log storage.
    pub trail_logs: Arc<dyn TrailLogRepository>,
    /// External credential verification for trail creation.
    pub authenticator: Arc<dyn Authenticator>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        trails: Arc<dyn TrailRepository>,
        waypoints: Arc<dyn WaypointRepository>,
        trail_logs: Arc<dyn TrailLogRepository>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            trails,
            waypoints,
            trail_logs,
            authenticator,
        }
    }
}
