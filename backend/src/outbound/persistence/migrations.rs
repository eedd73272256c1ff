//! Embedded schema migrations applied at process start.
//!
//! The service creates its tables if absent before accepting traffic, so a
//! fresh database needs no manual setup.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing the schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The maintenance connection could not be opened.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// A migration failed to apply.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
}

/// Apply all pending embedded migrations over a short-lived synchronous
/// connection. Called once from `main` before the pool is built.
pub fn apply_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut connection = PgConnection::establish(database_url)?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| MigrationError::Apply(error.to_string()))?;
    for version in applied {
        tracing::info!(migration = %version, "applied schema migration");
    }
    Ok(())
}
