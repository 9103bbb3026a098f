//! Pet routes: list, read by id, create.

use actix_web::{web, HttpResponse};

use super::method_not_allowed;
use crate::domain::CreatePetRequest;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::pets::PetService;
use crate::state::app_state::AppState;

/// GET /api/v1/pets
async fn list_pets(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let pets = app_state.pets().get_pets().await?;
    Ok(HttpResponse::Ok().json(pets))
}

/// GET /api/v1/pets/{pet_id}
async fn get_pet(
    pet_id: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let pet = app_state.pets().get_pet_by_id(&pet_id).await?;
    Ok(HttpResponse::Ok().json(pet))
}

/// POST /api/v1/pets
///
/// 201 with the stored pet; 400 for an undecodable body, an unconfirmed
/// breed or a malformed birth date; 500 when the insert fails.
async fn create_pet(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePetRequest>,
) -> Result<HttpResponse, AppError> {
    let pet = PetService::from_state(&app_state)
        .create_from_request(body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(pet))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_pets))
            .route(web::post().to(create_pet))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/{pet_id}")
            .route(web::get().to(get_pet))
            .default_service(web::to(method_not_allowed)),
    );
}
