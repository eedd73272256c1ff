//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod logs;
pub mod state;
pub mod trails;
pub(crate) mod validation;
pub mod waypoints;

#[cfg(test)]
mod trails_tests;

pub use error::ApiResult;
