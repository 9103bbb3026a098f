//! In-memory implementation of the store contract.
//!
//! Rows live in insertion-ordered vectors behind a `parking_lot::RwLock`; no
//! lock is held across an await point.

use async_trait::async_trait;
use parking_lot::RwLock;
use time::Date;
use uuid::Uuid;

use super::{BreedStore, PetStore};
use crate::domain::{Breed, Pet};
use crate::errors::domain::DomainError;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    breeds: RwLock<Vec<Breed>>,
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breeds(breeds: impl IntoIterator<Item = Breed>) -> Self {
        let store = Self::new();
        store.breeds.write().extend(breeds);
        store
    }

    /// Seed a breed, replacing any existing breed with the same id.
    pub fn insert_breed(&self, breed: Breed) {
        let mut breeds = self.breeds.write();
        breeds.retain(|b| b.id != breed.id);
        breeds.push(breed);
    }

    /// Seed a fully-formed pet (id included), bypassing the breed check.
    pub fn insert_pet(&self, pet: Pet) {
        let mut pets = self.pets.write();
        pets.retain(|p| p.id != pet.id);
        pets.push(pet);
    }
}

#[async_trait]
impl BreedStore for InMemoryStore {
    async fn get_breeds(&self) -> Result<Vec<Breed>, DomainError> {
        Ok(self.breeds.read().clone())
    }

    async fn get_breed_by_id(&self, id: &str) -> Result<Breed, DomainError> {
        self.breeds
            .read()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| DomainError::breed_not_found(id))
    }
}

#[async_trait]
impl PetStore for InMemoryStore {
    async fn get_pets(&self) -> Result<Vec<Pet>, DomainError> {
        Ok(self.pets.read().clone())
    }

    async fn get_pet_by_id(&self, id: &str) -> Result<Pet, DomainError> {
        self.pets
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DomainError::pet_not_found(id))
    }

    async fn create_pet(
        &self,
        name: &str,
        birth: Date,
        breed_id: &str,
    ) -> Result<Pet, DomainError> {
        let breed = self
            .get_breed_by_id(breed_id)
            .await
            .map_err(|e| e.context(format!("failed to get breed with ID {breed_id}")))?;

        let pet = Pet {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            birth,
            breed,
        };
        self.pets.write().push(pet.clone());
        Ok(pet)
    }

    async fn delete_pet(&self, id: &str) -> Result<(), DomainError> {
        let mut pets = self.pets.write();
        let before = pets.len();
        pets.retain(|p| p.id != id);
        if pets.len() == before {
            return Err(DomainError::pet_not_found(id));
        }
        Ok(())
    }
}
