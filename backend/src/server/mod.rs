//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};
use tracing::info;

use rich_backend::inbound::http::build_app;
use rich_backend::inbound::http::health::HealthState;
use rich_backend::wiring::in_memory_http_state;
#[cfg(debug_assertions)]
use rich_backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Storage is created once and shared by every worker.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(in_memory_http_state());
    let ServerConfig { bind_addr, workers } = config;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    });
    let server = match workers {
        Some(count) => server.workers(count.get()),
        None => server,
    };
    let server = server.bind(bind_addr)?.run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
