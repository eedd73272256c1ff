//! Service entry point: load configuration, migrate the schema, build the
//! adapters, and serve the HTTP API.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trailhead_backend::inbound::http::health::HealthState;
use trailhead_backend::inbound::http::state::HttpState;
use trailhead_backend::outbound::auth::HttpAuthenticator;
use trailhead_backend::outbound::persistence::{
    DbPool, DieselTrailLogRepository, DieselTrailRepository, DieselWaypointRepository, PoolConfig,
    apply_migrations,
};
use trailhead_backend::server::{AppConfig, build_app};

fn init_tracing() {
    // try_init rather than init: tests and embedding callers may have
    // installed a subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    apply_migrations(&config.database_url).map_err(std::io::Error::other)?;
    info!("database schema is up to date");

    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .await
        .map_err(std::io::Error::other)?;

    let authenticator = HttpAuthenticator::with_timeout(
        config.authenticator_url.clone(),
        config.authenticator_timeout,
    )
    .map_err(std::io::Error::other)?;

    let state = web::Data::new(HttpState::new(
        Arc::new(DieselTrailRepository::new(pool.clone())),
        Arc::new(DieselWaypointRepository::new(pool.clone())),
        Arc::new(DieselTrailLogRepository::new(pool)),
        Arc::new(authenticator),
    ));
    let health = web::Data::new(HealthState::new());

    let app_state = state.clone();
    let app_health = health.clone();
    let server = HttpServer::new(move || build_app(app_state.clone(), app_health.clone()))
        .bind(config.bind_addr)?;

    health.mark_ready();
    info!(addr = %config.bind_addr, "listening");

    let outcome = server.run().await;
    if outcome.is_err() {
        warn!("server terminated with an error");
    }
    outcome
}
