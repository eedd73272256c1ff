//! Outbound adapters: persistence and the external authenticator.

pub mod auth;
pub mod persistence;
