//! Database connection bootstrap.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::error::AppError;

/// Mask the password in a connection string for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        Some(colon_pos) if !auth_part[colon_pos + 1..].starts_with("//") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

/// Open the connection pool and verify it with a round-trip ping.
///
/// No retries: a failure here is fatal at startup.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, AppError> {
    let safe_url = sanitize_db_url(&config.url);

    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(false);

    let conn = Database::connect(opts).await.map_err(|e| {
        warn!(db_url = %safe_url, error = %e, "database connect failed");
        AppError::config(format!("failed to connect to database: {e}"))
    })?;

    conn.ping().await.map_err(|e| {
        warn!(db_url = %safe_url, error = %e, "database ping failed");
        AppError::config(format!("failed to ping database: {e}"))
    })?;

    info!(
        db_url = %safe_url,
        backend = ?conn.get_database_backend(),
        max_connections = config.max_connections,
        "database connected"
    );
    Ok(conn)
}
