//! Reqwest-backed authenticator adapter.
//!
//! Owns transport details only: credential serialisation, the bounded
//! request timeout, HTTP error mapping, and JSON decoding of the identity
//! response. The plaintext password goes into the request body and nowhere
//! else; no logging happens in this module while credentials are in scope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::domain::ports::{Authenticator, AuthenticatorError};
use crate::domain::{AuthenticatedUser, Credentials};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticator adapter performing HTTP POST requests against the external
/// identity service.
pub struct HttpAuthenticator {
    client: Client,
    endpoint: Url,
}

/// Successful identity response. The service guarantees at least `userID`.
#[derive(Debug, Deserialize)]
struct IdentityDto {
    #[serde(rename = "userID")]
    user_id: i32,
}

impl HttpAuthenticator {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout. The timeout bounds
    /// the whole call; a hanging identity service fails the request instead
    /// of stalling it indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthenticatorError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({
                "email": credentials.email(),
                "password": credentials.password(),
            }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        decode_identity(body.as_ref())
    }
}

fn decode_identity(body: &[u8]) -> Result<AuthenticatedUser, AuthenticatorError> {
    let identity: IdentityDto = serde_json::from_slice(body).map_err(|error| {
        AuthenticatorError::decode(format!("invalid identity payload: {error}"))
    })?;
    Ok(AuthenticatedUser {
        user_id: identity.user_id,
    })
}

fn map_transport_error(error: reqwest::Error) -> AuthenticatorError {
    // Error bodies are not inspected here; reqwest's message never carries
    // the credentials.
    if error.is_timeout() {
        AuthenticatorError::timeout(error.to_string())
    } else {
        AuthenticatorError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> AuthenticatorError {
    let message = format!("status {}", status.as_u16());
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AuthenticatorError::timeout(message)
        }
        _ if status.is_client_error() => AuthenticatorError::rejected(message),
        _ => AuthenticatorError::transport(message),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the non-network mapping helpers.
    use super::*;
    use rstest::rstest;

    #[test]
    fn decodes_identity_with_user_id() {
        let user = decode_identity(br#"{"userID": 7, "role": "user"}"#).expect("decode");
        assert_eq!(user.user_id, 7);
    }

    #[test]
    fn rejects_identity_without_user_id() {
        let error = decode_identity(br#"{"role": "user"}"#).expect_err("decode must fail");
        assert!(matches!(error, AuthenticatorError::Decode { .. }));
    }

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, "Rejected")]
    #[case::forbidden(StatusCode::FORBIDDEN, "Rejected")]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Transport")]
    fn maps_http_statuses_to_expected_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status);
        let matched = match expected {
            "Rejected" => matches!(error, AuthenticatorError::Rejected { .. }),
            "Timeout" => matches!(error, AuthenticatorError::Timeout { .. }),
            "Transport" => matches!(error, AuthenticatorError::Transport { .. }),
            _ => panic!("unsupported test expectation: {expected}"),
        };
        assert!(matched, "status {status} should map to {expected}");
    }
}
