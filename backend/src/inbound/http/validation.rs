//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies use explicit serde schemas with `Option` fields; these
//! helpers turn absent or out-of-range values into `InvalidRequest` errors
//! before anything reaches the persistence layer.

use serde_json::json;

use crate::domain::Error;

pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

pub(crate) fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Distance is optional, but when present it must be a finite, non-negative
/// number of kilometres.
pub(crate) fn validate_distance(distance: Option<f64>) -> Result<Option<f64>, Error> {
    match distance {
        Some(value) if !value.is_finite() || value < 0.0 => {
            Err(
                Error::invalid_request("distance must be a non-negative number").with_details(
                    json!({
                        "field": "distance",
                        "value": value.to_string(),
                        "code": "invalid_distance",
                    }),
                ),
            )
        }
        other => Ok(other),
    }
}
