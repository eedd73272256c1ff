//! Outbound adapter for the external authentication service.

mod http_authenticator;

pub use http_authenticator::HttpAuthenticator;
