//! Breed read routes.

use actix_web::{web, HttpResponse};

use super::method_not_allowed;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/v1/breeds
async fn list_breeds(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let breeds = app_state.breeds().get_breeds().await?;
    Ok(HttpResponse::Ok().json(breeds))
}

/// GET /api/v1/breeds/{breed_id}
async fn get_breed(
    breed_id: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let breed = app_state.breeds().get_breed_by_id(&breed_id).await?;
    Ok(HttpResponse::Ok().json(breed))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_breeds))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/{breed_id}")
            .route(web::get().to(get_breed))
            .default_service(web::to(method_not_allowed)),
    );
}
