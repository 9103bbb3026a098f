//! HTTP server lifecycle: bind, serve, then release the database pool.

use actix_web::{web, App, HttpServer};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::infra::state::BuiltState;
use crate::middleware::cors::cors_middleware;
use crate::middleware::request_trace::RequestTrace;
use crate::routes;

/// Serve until shutdown. The relational pool in `built` is closed whether
/// binding fails or the server stops.
pub async fn serve(config: &ServerConfig, built: BuiltState) -> std::io::Result<()> {
    let BuiltState { state, sql } = built;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    });

    let result = match server.bind((config.host.as_str(), config.port)) {
        Ok(bound) => {
            info!(host = %config.host, port = config.port, "listening");
            bound.run().await
        }
        Err(e) => {
            error!(host = %config.host, port = config.port, error = %e, "failed to bind listener");
            Err(e)
        }
    };

    if let Some(sql) = sql {
        match sql.close().await {
            Ok(()) => info!("database pool closed"),
            Err(e) => error!(error = %e, "failed to close database pool"),
        }
    }

    result
}
