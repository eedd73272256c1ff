//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Trail owners, provisioned out-of-band. Email is unique.
    authors (id) {
        id -> Int4,
        #[max_length = 100]
        email -> Varchar,
        #[max_length = 50]
        role -> Varchar,
    }
}

diesel::table! {
    /// Trail records. `date_created` defaults to the insertion time.
    trails (id) {
        id -> Int4,
        #[max_length = 100]
        title -> Varchar,
        #[max_length = 500]
        overview -> Nullable<Varchar>,
        distance -> Nullable<Float8>,
        #[max_length = 50]
        complexity -> Varchar,
        date_created -> Timestamptz,
        author_id -> Int4,
    }
}

diesel::table! {
    /// Coordinates belonging to a trail.
    waypoints (id) {
        id -> Int4,
        trail_id -> Int4,
        latitude -> Float8,
        longitude -> Float8,
    }
}

diesel::table! {
    /// Append-only activity records. `recorded_at` defaults to the
    /// insertion time.
    trail_logs (id) {
        id -> Int4,
        trail_id -> Int4,
        author_id -> Int4,
        recorded_at -> Timestamptz,
    }
}

diesel::joinable!(trails -> authors (author_id));
diesel::joinable!(waypoints -> trails (trail_id));
diesel::joinable!(trail_logs -> trails (trail_id));
diesel::joinable!(trail_logs -> authors (author_id));

diesel::allow_tables_to_appear_in_same_query!(authors, trails, waypoints, trail_logs);
