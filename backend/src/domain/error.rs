//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters map these errors to HTTP statuses and
//! JSON envelopes. The serialised body carries `message` (and `details` for
//! validation failures); the [`ErrorCode`] drives status selection only and
//! never appears on the wire, keeping response bodies down to the documented
//! `{"message": …}` shape.

use serde::Serialize;
use serde_json::Value;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or the identity service was unreachable.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use trailhead_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Trail not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Trail not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    #[serde(skip)]
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Error::not_found("Trail not found"), ErrorCode::NotFound)]
    #[case(Error::unauthorized("Authentication failed"), ErrorCode::Unauthorized)]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_assign_expected_codes(#[case] error: Error, #[case] code: ErrorCode) {
        assert_eq!(error.code(), code);
    }

    #[test]
    fn serialises_message_only_without_details() {
        let body = serde_json::to_value(Error::not_found("Trail not found")).expect("serialise");
        assert_eq!(body, json!({ "message": "Trail not found" }));
    }

    #[test]
    fn serialises_details_when_present() {
        let error = Error::invalid_request("missing required field: title")
            .with_details(json!({ "field": "title" }));
        let body = serde_json::to_value(error).expect("serialise");
        assert_eq!(body["details"]["field"], "title");
    }
}
