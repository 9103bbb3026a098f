//! Pet creation flow.
//!
//! Gates run in order and stop at the first failure: decoded body (done by
//! the extractor), breed existence, birth date, persistence.

use tracing::{debug, error, info, warn};

use crate::domain::{parse_birth_date, CreatePetRequest, Pet};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::store::{BreedStore, PetStore};
use crate::trace_ctx;

pub const BREED_CHECK_ERROR: &str = "Error at checking the breed";
pub const BIRTH_FORMAT_ERROR: &str = "Bad date of birth format. Use YYYY-MM-DD";
pub const PET_CREATE_ERROR: &str = "Error creating pet";

pub struct PetService<'a> {
    breeds: &'a dyn BreedStore,
    pets: &'a dyn PetStore,
}

impl<'a> PetService<'a> {
    pub fn new(breeds: &'a dyn BreedStore, pets: &'a dyn PetStore) -> Self {
        Self { breeds, pets }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(state.breeds(), state.pets())
    }

    /// Validate a decoded request and persist the pet.
    ///
    /// Any breed lookup failure is a 400, including a store outage: the
    /// caller is not told which one happened.
    pub async fn create_from_request(&self, request: CreatePetRequest) -> Result<Pet, AppError> {
        let trace_id = trace_ctx::trace_id();

        if let Err(e) = self.breeds.get_breed_by_id(&request.breed_id).await {
            if e.is_not_found() {
                warn!(trace_id = %trace_id, breed_id = %request.breed_id, "pet references unknown breed");
            } else {
                error!(trace_id = %trace_id, breed_id = %request.breed_id, error = %e, "breed check failed");
            }
            return Err(AppError::bad_request(ErrorCode::UnknownBreed, BREED_CHECK_ERROR));
        }

        let birth = parse_birth_date(&request.birth).map_err(|e| {
            debug!(trace_id = %trace_id, birth = %request.birth, error = %e, "unparseable birth date");
            AppError::bad_request(ErrorCode::InvalidBirthDate, BIRTH_FORMAT_ERROR)
        })?;

        let pet = self
            .pets
            .create_pet(&request.name, birth, &request.breed_id)
            .await
            .map_err(|e| {
                error!(trace_id = %trace_id, error = %e, "Error creating pet in store");
                AppError::internal(ErrorCode::PetCreateFailed, PET_CREATE_ERROR)
            })?;

        info!(trace_id = %trace_id, pet_id = %pet.id, breed_id = %pet.breed.id, "pet created");
        Ok(pet)
    }
}
