use dog_bff::config::AppConfig;
use dog_bff::infra::state::build_state;
use dog_bff::server;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let built = match build_state().with_db(config.db.clone()).build().await {
        Ok(built) => built,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %config.server.host, port = config.server.port, "starting dog BFF");
    server::serve(&config.server, built).await
}
