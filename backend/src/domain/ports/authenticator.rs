//! Driving port for credential verification.
//!
//! Inbound adapters call this port to authenticate a write without knowing
//! the backing identity service. Handler tests substitute a test double; the
//! production implementation forwards credentials to the external
//! authenticator API over HTTP.

use async_trait::async_trait;

use crate::domain::{AuthenticatedUser, Credentials};

use super::define_port_error;

define_port_error! {
    /// Failure modes of an authentication attempt.
    ///
    /// Handlers treat every variant as "authentication failed"; the variants
    /// exist so logs can distinguish bad credentials from an unreachable or
    /// misbehaving identity service.
    pub enum AuthenticatorError {
        /// The identity service answered and rejected the credentials.
        Rejected { message: String } =>
            "credentials rejected: {message}",
        /// The request could not be delivered or the connection failed.
        Transport { message: String } =>
            "authenticator unreachable: {message}",
        /// The bounded request timeout elapsed.
        Timeout { message: String } =>
            "authenticator timed out: {message}",
        /// The service answered 200 but the body was not the expected shape.
        Decode { message: String } =>
            "authenticator response invalid: {message}",
    }
}

/// Port for the external authentication service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify credentials and return the authenticated user's identity.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthenticatorError>;
}

/// In-memory authenticator for tests: `a@x.com` / `p` maps to user id 7,
/// everything else is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthenticator;

#[async_trait]
impl Authenticator for FixtureAuthenticator {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthenticatorError> {
        if credentials.email() == "a@x.com" && credentials.password() == "p" {
            Ok(AuthenticatedUser { user_id: 7 })
        } else {
            Err(AuthenticatorError::rejected("unknown email or password"))
        }
    }
}
