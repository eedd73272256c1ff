//! Trail HTTP handlers.
//!
//! ```text
//! GET    /trails
//! GET    /trails/{id}
//! POST   /trails        (authenticated)
//! PUT    /trails/{id}
//! DELETE /trails/{id}
//! ```
//!
//! PUT and DELETE deliberately carry no authentication check; only creation
//! is gated on the external authenticator, matching the published surface.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Credentials, Error, NewTrail, Trail, TrailChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{require_field, validate_distance};

/// Wire representation of a trail.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrailResponse {
    #[serde(rename = "trailID")]
    pub trail_id: i32,
    pub title: String,
    pub overview: Option<String>,
    pub distance: Option<f64>,
    pub complexity: String,
    /// RFC 3339 creation timestamp.
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    #[serde(rename = "authorID")]
    pub author_id: i32,
}

impl From<Trail> for TrailResponse {
    fn from(trail: Trail) -> Self {
        Self {
            trail_id: trail.id,
            title: trail.title,
            overview: trail.overview,
            distance: trail.distance,
            complexity: trail.complexity,
            date_created: trail.date_created.to_rfc3339(),
            author_id: trail.author_id,
        }
    }
}

/// Request payload for creating a trail. Credentials ride alongside the
/// trail fields and are forwarded to the external authenticator.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTrailRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub title: Option<String>,
    pub complexity: Option<String>,
    pub overview: Option<String>,
    pub distance: Option<f64>,
}

/// Request payload for partially updating a trail. Absent fields are left
/// unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTrailRequest {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub distance: Option<f64>,
    pub complexity: Option<String>,
}

/// Confirmation body for trail creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrailCreatedResponse {
    pub message: String,
    #[serde(rename = "trailID")]
    pub trail_id: i32,
}

/// Plain confirmation body for updates and deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: String,
}

fn trail_not_found() -> Error {
    Error::not_found("Trail not found")
}

#[derive(Debug)]
struct ParsedCreateRequest {
    credentials: Credentials,
    title: String,
    overview: Option<String>,
    distance: Option<f64>,
    complexity: String,
}

fn parse_create_request(payload: CreateTrailRequest) -> Result<ParsedCreateRequest, Error> {
    let email = require_field(payload.email, "email")?;
    let password = require_field(payload.password, "password")?;
    let title = require_field(payload.title, "title")?;
    let complexity = require_field(payload.complexity, "complexity")?;
    let distance = validate_distance(payload.distance)?;

    Ok(ParsedCreateRequest {
        credentials: Credentials::new(email, password),
        title,
        overview: payload.overview,
        distance,
        complexity,
    })
}

fn parse_update_request(payload: UpdateTrailRequest) -> Result<TrailChanges, Error> {
    Ok(TrailChanges {
        title: payload.title,
        overview: payload.overview,
        distance: validate_distance(payload.distance)?,
        complexity: payload.complexity,
    })
}

/// List every trail.
#[utoipa::path(
    get,
    path = "/trails",
    responses(
        (status = 200, description = "All trails", body = [TrailResponse])
    ),
    tags = ["trails"],
    operation_id = "listTrails"
)]
#[get("/trails")]
pub async fn list_trails(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TrailResponse>>> {
    let trails = state.trails.list().await?;
    Ok(web::Json(
        trails.into_iter().map(TrailResponse::from).collect(),
    ))
}

/// Fetch one trail by id.
#[utoipa::path(
    get,
    path = "/trails/{id}",
    params(("id" = i32, Path, description = "Trail id")),
    responses(
        (status = 200, description = "The trail", body = TrailResponse),
        (status = 404, description = "Trail not found", body = StatusMessage)
    ),
    tags = ["trails"],
    operation_id = "getTrail"
)]
#[get("/trails/{id}")]
pub async fn get_trail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<TrailResponse>> {
    let id = path.into_inner();
    let trail = state.trails.find(id).await?.ok_or_else(trail_not_found)?;
    Ok(web::Json(TrailResponse::from(trail)))
}

/// Create a trail owned by the authenticated user.
#[utoipa::path(
    post,
    path = "/trails",
    request_body = CreateTrailRequest,
    responses(
        (status = 201, description = "Trail created", body = TrailCreatedResponse),
        (status = 400, description = "Invalid request", body = StatusMessage),
        (status = 401, description = "Authentication failed", body = StatusMessage)
    ),
    tags = ["trails"],
    operation_id = "createTrail"
)]
#[post("/trails")]
pub async fn create_trail(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTrailRequest>,
) -> ApiResult<HttpResponse> {
    let parsed = parse_create_request(payload.into_inner())?;

    // Every authenticator failure mode reads as a failed authentication for
    // the caller; the log line keeps the variants apart for operators.
    let user = state
        .authenticator
        .authenticate(&parsed.credentials)
        .await
        .map_err(|err| {
            warn!(error = %err, email = parsed.credentials.email(), "authentication failed");
            Error::unauthorized("Authentication failed")
        })?;

    let trail = state
        .trails
        .create(&NewTrail {
            title: parsed.title,
            overview: parsed.overview,
            distance: parsed.distance,
            complexity: parsed.complexity,
            author_id: user.user_id,
        })
        .await?;

    // The trail is committed at this point; a failed log append is not
    // surfaced to the caller.
    if let Err(err) = state.trail_logs.record(trail.id, user.user_id).await {
        warn!(error = %err, trail_id = trail.id, "failed to record trail log entry");
    }

    Ok(HttpResponse::Created().json(TrailCreatedResponse {
        message: "Trail created".to_owned(),
        trail_id: trail.id,
    }))
}

/// Partially update a trail.
#[utoipa::path(
    put,
    path = "/trails/{id}",
    params(("id" = i32, Path, description = "Trail id")),
    request_body = UpdateTrailRequest,
    responses(
        (status = 200, description = "Trail updated", body = StatusMessage),
        (status = 400, description = "Invalid request", body = StatusMessage),
        (status = 404, description = "Trail not found", body = StatusMessage)
    ),
    tags = ["trails"],
    operation_id = "updateTrail"
)]
#[put("/trails/{id}")]
pub async fn update_trail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateTrailRequest>,
) -> ApiResult<web::Json<StatusMessage>> {
    let id = path.into_inner();
    let changes = parse_update_request(payload.into_inner())?;

    state
        .trails
        .update(id, &changes)
        .await?
        .ok_or_else(trail_not_found)?;

    Ok(web::Json(StatusMessage {
        message: "Trail updated successfully".to_owned(),
    }))
}

/// Delete a trail.
#[utoipa::path(
    delete,
    path = "/trails/{id}",
    params(("id" = i32, Path, description = "Trail id")),
    responses(
        (status = 200, description = "Trail deleted", body = StatusMessage),
        (status = 404, description = "Trail not found", body = StatusMessage)
    ),
    tags = ["trails"],
    operation_id = "deleteTrail"
)]
#[delete("/trails/{id}")]
pub async fn delete_trail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<StatusMessage>> {
    let id = path.into_inner();
    if !state.trails.delete(id).await? {
        return Err(trail_not_found());
    }

    Ok(web::Json(StatusMessage {
        message: "Trail deleted successfully".to_owned(),
    }))
}
