//! Trail log entity: a timestamped record of an author's activity on a trail.
//!
//! Logs are append-only. The service records one when a trail is created and
//! exposes a read-only listing per trail; there is no update or delete path.

use chrono::{DateTime, Utc};

/// One activity record linking an author to a trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailLog {
    /// Storage-assigned primary key.
    pub id: i32,
    /// Trail the activity relates to.
    pub trail_id: i32,
    /// Author who performed the activity.
    pub author_id: i32,
    /// Server-assigned timestamp of the activity.
    pub recorded_at: DateTime<Utc>,
}
