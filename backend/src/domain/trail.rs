//! Trail aggregate and its mutation value objects.

use chrono::{DateTime, Utc};

/// A named hiking route with descriptive metadata, owned by an author.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    /// Storage-assigned primary key.
    pub id: i32,
    /// Display title (required).
    pub title: String,
    /// Free-text description, optional.
    pub overview: Option<String>,
    /// Length in kilometres, optional but non-negative when present.
    pub distance: Option<f64>,
    /// Difficulty label, e.g. `easy` or `hard` (required).
    pub complexity: String,
    /// Server-assigned creation timestamp.
    pub date_created: DateTime<Utc>,
    /// Owning author's id.
    pub author_id: i32,
}

/// Fields required to create a trail. The id and creation timestamp are
/// assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrail {
    pub title: String,
    pub overview: Option<String>,
    pub distance: Option<f64>,
    pub complexity: String,
    /// Identity of the authenticated author creating the trail.
    pub author_id: i32,
}

/// Partial update for a trail. `None` fields are left unchanged; `Some`
/// fields overwrite the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrailChanges {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub distance: Option<f64>,
    pub complexity: Option<String>,
}

impl TrailChanges {
    /// True when no field is being changed. Repositories short-circuit such
    /// updates into a plain lookup.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.overview.is_none()
            && self.distance.is_none()
            && self.complexity.is_none()
    }
}
