//! Waypoint HTTP handlers.
//!
//! ```text
//! GET /waypoints/{trailID}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Waypoint;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Wire representation of a waypoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct WaypointResponse {
    #[serde(rename = "waypointID")]
    pub waypoint_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Waypoint> for WaypointResponse {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            waypoint_id: waypoint.id,
            latitude: waypoint.latitude,
            longitude: waypoint.longitude,
        }
    }
}

/// List the waypoints of one trail.
///
/// A trail with no waypoints (or an unknown trail id) yields an empty
/// array, never a 404.
#[utoipa::path(
    get,
    path = "/waypoints/{trailID}",
    params(("trailID" = i32, Path, description = "Trail id")),
    responses(
        (status = 200, description = "Waypoints for the trail", body = [WaypointResponse])
    ),
    tags = ["waypoints"],
    operation_id = "listWaypoints"
)]
#[get("/waypoints/{trail_id}")]
pub async fn list_waypoints(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<WaypointResponse>>> {
    let trail_id = path.into_inner();
    let waypoints = state.waypoints.list_for_trail(trail_id).await?;
    Ok(web::Json(
        waypoints.into_iter().map(WaypointResponse::from).collect(),
    ))
}
