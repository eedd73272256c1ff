//! OpenAPI document for the REST surface, served through Swagger UI in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::logs::TrailLogResponse;
use crate::inbound::http::trails::{
    CreateTrailRequest, StatusMessage, TrailCreatedResponse, TrailResponse, UpdateTrailRequest,
};
use crate::inbound::http::waypoints::WaypointResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trailhead API",
        description = "Trail catalogue with waypoints, trail logs, and delegated authentication."
    ),
    paths(
        crate::inbound::http::trails::list_trails,
        crate::inbound::http::trails::get_trail,
        crate::inbound::http::trails::create_trail,
        crate::inbound::http::trails::update_trail,
        crate::inbound::http::trails::delete_trail,
        crate::inbound::http::waypoints::list_waypoints,
        crate::inbound::http::logs::list_trail_logs,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(
        TrailResponse,
        CreateTrailRequest,
        UpdateTrailRequest,
        TrailCreatedResponse,
        StatusMessage,
        WaypointResponse,
        TrailLogResponse,
    )),
    tags(
        (name = "trails", description = "Trail catalogue operations"),
        (name = "waypoints", description = "Waypoints along a trail"),
        (name = "logs", description = "Trail activity log"),
        (name = "health", description = "Probes for orchestration"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi as _;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/trails",
            "/trails/{id}",
            "/waypoints/{trailID}",
            "/logs/{trailID}",
            "/health/live",
            "/health/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "OpenAPI document should describe {path}"
            );
        }
    }
}
