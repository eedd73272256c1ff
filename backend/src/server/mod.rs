//! HTTP server assembly.
//!
//! `build_app` wires every route onto an [`actix_web::App`] so that `main`
//! and the integration tests construct byte-for-byte identical applications.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::error::{json_error_handler, path_error_handler};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::logs::list_trail_logs;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::trails::{
    create_trail, delete_trail, get_trail, list_trails, update_trail,
};
use crate::inbound::http::waypoints::list_waypoints;

mod config;

pub use config::{AppConfig, ConfigError};

/// Assemble the application with every route and its shared state.
///
/// The Swagger UI is mounted only in debug builds; the JSON document it
/// serves comes from [`crate::doc::ApiDoc`].
pub fn build_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(health)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(list_trails)
        .service(create_trail)
        .service(get_trail)
        .service(update_trail)
        .service(delete_trail)
        .service(list_waypoints)
        .service(list_trail_logs)
        .service(live)
        .service(ready);

    #[cfg(debug_assertions)]
    let app = {
        use utoipa::OpenApi as _;
        use utoipa_swagger_ui::SwaggerUi;

        app.service(
            SwaggerUi::new("/docs/{_:.*}")
                .url("/api-docs/openapi.json", crate::doc::ApiDoc::openapi()),
        )
    };

    app
}
