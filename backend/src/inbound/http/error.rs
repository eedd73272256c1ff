//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn failures into consistent JSON bodies and status codes via `?`.
//! Port errors convert here too, so handlers never match on adapter error
//! enums themselves.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::{
    TrailLogRepositoryError, TrailRepositoryError, WaypointRepositoryError,
};
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// Extractor error handler for `web::JsonConfig`: malformed or mistyped
/// request bodies render the same `{"message": …}` envelope as domain
/// errors instead of Actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid request body: {err}")).into()
}

/// Extractor error handler for `web::PathConfig`: non-numeric path segments
/// get the JSON envelope as well.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path parameter: {err}")).into()
}

impl From<TrailRepositoryError> for Error {
    fn from(err: TrailRepositoryError) -> Self {
        error!(error = %err, "trail repository failure");
        Error::internal(err.to_string())
    }
}

impl From<WaypointRepositoryError> for Error {
    fn from(err: WaypointRepositoryError) -> Self {
        error!(error = %err, "waypoint repository failure");
        Error::internal(err.to_string())
    }
}

impl From<TrailLogRepositoryError> for Error {
    fn from(err: TrailLogRepositoryError) -> Self {
        error!(error = %err, "trail log repository failure");
        Error::internal(err.to_string())
    }
}
