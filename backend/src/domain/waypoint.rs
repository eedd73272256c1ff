//! Waypoint entity: a geographic coordinate belonging to a trail.

/// A single coordinate on a trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Storage-assigned primary key.
    pub id: i32,
    /// Owning trail's id.
    pub trail_id: i32,
    /// WGS 84 latitude.
    pub latitude: f64,
    /// WGS 84 longitude.
    pub longitude: f64,
}
