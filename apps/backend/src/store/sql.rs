//! Relational implementation of the store contract on SeaORM.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use time::Date;
use tracing::debug;
use uuid::Uuid;

use super::{BreedStore, PetStore};
use crate::adapters::pets_sea::PetCreate;
use crate::adapters::{breeds_sea, pets_sea};
use crate::config::DbConfig;
use crate::domain::{Breed, Pet};
use crate::entities::{breeds, pets};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::infra::db::connect_db;
use crate::infra::db_errors::map_db_err;

/// Store backed by a pooled SeaORM connection.
///
/// Cloning shares the pool. The pool lives until [`SqlStore::close`].
#[derive(Debug, Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect and ping; see [`connect_db`].
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        Ok(Self::new(connect_db(config).await?))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Release the pool. Clones still held elsewhere become unusable.
    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

impl From<breeds::Model> for Breed {
    fn from(model: breeds::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            temperament: model.temperament,
            origin: model.origin,
        }
    }
}

fn pet_from_row((pet, breed): (pets::Model, breeds::Model)) -> Pet {
    Pet {
        id: pet.id,
        name: pet.name,
        birth: pet.birth,
        breed: Breed::from(breed),
    }
}

#[async_trait]
impl BreedStore for SqlStore {
    async fn get_breeds(&self) -> Result<Vec<Breed>, DomainError> {
        let rows = breeds_sea::list_breeds(&self.db)
            .await
            .map_err(|e| map_db_err(e).context("failed to query breeds"))?;
        Ok(rows.into_iter().map(Breed::from).collect())
    }

    async fn get_breed_by_id(&self, id: &str) -> Result<Breed, DomainError> {
        breeds_sea::find_breed_by_id(&self.db, id)
            .await
            .map_err(|e| map_db_err(e).context(format!("query error for breed ID {id}")))?
            .map(Breed::from)
            .ok_or_else(|| DomainError::breed_not_found(id))
    }
}

#[async_trait]
impl PetStore for SqlStore {
    async fn get_pets(&self) -> Result<Vec<Pet>, DomainError> {
        let rows = pets_sea::list_pets_with_breeds(&self.db)
            .await
            .map_err(|e| map_db_err(e).context("failed to query pets"))?;
        Ok(rows.into_iter().map(pet_from_row).collect())
    }

    async fn get_pet_by_id(&self, id: &str) -> Result<Pet, DomainError> {
        pets_sea::find_pet_with_breed(&self.db, id)
            .await
            .map_err(|e| map_db_err(e).context(format!("query error for pet ID {id}")))?
            .map(pet_from_row)
            .ok_or_else(|| DomainError::pet_not_found(id))
    }

    async fn create_pet(
        &self,
        name: &str,
        birth: Date,
        breed_id: &str,
    ) -> Result<Pet, DomainError> {
        // Checked up front so a missing breed is NotFound, not an FK violation.
        let breed = self
            .get_breed_by_id(breed_id)
            .await
            .map_err(|e| e.context(format!("failed to get breed with ID {breed_id}")))?;

        let inserted = pets_sea::insert_pet(
            &self.db,
            PetCreate {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                birth,
                breed_id: breed.id.clone(),
            },
        )
        .await
        .map_err(|e| map_db_err(e).context("failed to insert pet"))?;

        debug!(pet_id = %inserted.id, breed_id = %breed.id, "pet inserted");

        Ok(Pet {
            id: inserted.id,
            name: inserted.name,
            birth: inserted.birth,
            breed,
        })
    }

    async fn delete_pet(&self, id: &str) -> Result<(), DomainError> {
        let removed = pets_sea::delete_pet(&self.db, id)
            .await
            .map_err(|e| map_db_err(e).context(format!("failed to delete pet {id}")))?;
        if removed == 0 {
            return Err(DomainError::pet_not_found(id));
        }
        Ok(())
    }
}
