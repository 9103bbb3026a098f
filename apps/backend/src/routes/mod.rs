use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod breeds;
pub mod pets;

/// Configure the `/api/v1` routes.
///
/// Shared by `main.rs` and the test app builder so both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/breeds").configure(breeds::configure_routes));
    cfg.service(web::scope("/api/v1/pets").configure(pets::configure_routes));
}

/// Fallback for unsupported methods on a known resource.
pub(crate) async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed())
}
