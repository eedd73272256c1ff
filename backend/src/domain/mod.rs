//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the HTTP and
//! persistence layers, plus the transport-agnostic error type that inbound
//! adapters translate into HTTP responses. Ports live in [`ports`].

pub mod error;
pub mod ports;

mod auth;
mod trail;
mod trail_log;
mod waypoint;

pub use self::auth::{AuthenticatedUser, Credentials};
pub use self::error::{Error, ErrorCode};
pub use self::trail::{NewTrail, Trail, TrailChanges};
pub use self::trail_log::TrailLog;
pub use self::waypoint::Waypoint;
