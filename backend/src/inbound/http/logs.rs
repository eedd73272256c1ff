//! Trail log HTTP handlers.
//!
//! ```text
//! GET /logs/{trailID}
//! ```
//!
//! Logs are append-only and written internally when a trail is created;
//! the HTTP surface only reads them.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::TrailLog;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Wire representation of a trail log entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrailLogResponse {
    #[serde(rename = "logID")]
    pub log_id: i32,
    #[serde(rename = "trailID")]
    pub trail_id: i32,
    #[serde(rename = "authorID")]
    pub author_id: i32,
    /// RFC 3339 activity timestamp.
    pub timestamp: String,
}

impl From<TrailLog> for TrailLogResponse {
    fn from(log: TrailLog) -> Self {
        Self {
            log_id: log.id,
            trail_id: log.trail_id,
            author_id: log.author_id,
            timestamp: log.recorded_at.to_rfc3339(),
        }
    }
}

/// List the activity log of one trail, oldest first.
///
/// Unknown trail ids yield an empty array, mirroring the waypoint listing.
#[utoipa::path(
    get,
    path = "/logs/{trailID}",
    params(("trailID" = i32, Path, description = "Trail id")),
    responses(
        (status = 200, description = "Activity log for the trail", body = [TrailLogResponse])
    ),
    tags = ["logs"],
    operation_id = "listTrailLogs"
)]
#[get("/logs/{trail_id}")]
pub async fn list_trail_logs(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<TrailLogResponse>>> {
    let trail_id = path.into_inner();
    let logs = state.trail_logs.list_for_trail(trail_id).await?;
    Ok(web::Json(logs.into_iter().map(TrailLogResponse::from).collect()))
}
