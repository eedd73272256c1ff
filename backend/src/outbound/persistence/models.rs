//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer: these types satisfy
//! Diesel's trait requirements and are converted to domain entities at the
//! adapter boundary, never exposed beyond it.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Trail, TrailLog, Waypoint};

use super::schema::{trail_logs, trails, waypoints};

/// Row struct for reading from the trails table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = trails)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TrailRow {
    pub id: i32,
    pub title: String,
    pub overview: Option<String>,
    pub distance: Option<f64>,
    pub complexity: String,
    pub date_created: DateTime<Utc>,
    pub author_id: i32,
}

impl From<TrailRow> for Trail {
    fn from(row: TrailRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            overview: row.overview,
            distance: row.distance,
            complexity: row.complexity,
            date_created: row.date_created,
            author_id: row.author_id,
        }
    }
}

/// Insertable struct for creating trail records. Id and creation timestamp
/// come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = trails)]
pub(crate) struct NewTrailRow<'a> {
    pub title: &'a str,
    pub overview: Option<&'a str>,
    pub distance: Option<f64>,
    pub complexity: &'a str,
    pub author_id: i32,
}

/// Changeset for partial trail updates. `None` fields are skipped, leaving
/// the stored value untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = trails)]
pub(crate) struct TrailChangeset<'a> {
    pub title: Option<&'a str>,
    pub overview: Option<&'a str>,
    pub distance: Option<f64>,
    pub complexity: Option<&'a str>,
}

/// Row struct for reading from the waypoints table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = waypoints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WaypointRow {
    pub id: i32,
    pub trail_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<WaypointRow> for Waypoint {
    fn from(row: WaypointRow) -> Self {
        Self {
            id: row.id,
            trail_id: row.trail_id,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

/// Row struct for reading from the trail_logs table.
#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = trail_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TrailLogRow {
    pub id: i32,
    pub trail_id: i32,
    pub author_id: i32,
    pub recorded_at: DateTime<Utc>,
}

impl From<TrailLogRow> for TrailLog {
    fn from(row: TrailLogRow) -> Self {
        Self {
            id: row.id,
            trail_id: row.trail_id,
            author_id: row.author_id,
            recorded_at: row.recorded_at,
        }
    }
}

/// Insertable struct for appending trail log records.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = trail_logs)]
pub(crate) struct NewTrailLogRow {
    pub trail_id: i32,
    pub author_id: i32,
}
