//! Store contract: the capability set handlers depend on.
//!
//! Handlers only ever see `dyn BreedStore` / `dyn PetStore`. `SqlStore` is
//! the relational implementation; `InMemoryStore` backs tests and local
//! runs without a database. Lookups that match nothing fail with
//! `DomainError::NotFound`; every other failure is an opaque store error.

use async_trait::async_trait;
use time::Date;

use crate::domain::{Breed, Pet};
use crate::errors::domain::DomainError;

pub mod memory;
pub mod sql;

pub use memory::InMemoryStore;
pub use sql::SqlStore;

#[async_trait]
pub trait BreedStore: Send + Sync {
    /// All breeds. An empty table is an empty vec, not `NotFound`.
    async fn get_breeds(&self) -> Result<Vec<Breed>, DomainError>;

    async fn get_breed_by_id(&self, id: &str) -> Result<Breed, DomainError>;
}

#[async_trait]
pub trait PetStore: Send + Sync {
    /// All pets, each with its breed embedded.
    async fn get_pets(&self) -> Result<Vec<Pet>, DomainError>;

    async fn get_pet_by_id(&self, id: &str) -> Result<Pet, DomainError>;

    /// Create a pet after confirming `breed_id` exists.
    ///
    /// A missing breed surfaces as `NotFound` and nothing is written. The
    /// id of the new pet is assigned by the store.
    async fn create_pet(&self, name: &str, birth: Date, breed_id: &str)
        -> Result<Pet, DomainError>;

    /// Delete a pet; `NotFound` when no row was removed.
    async fn delete_pet(&self, id: &str) -> Result<(), DomainError>;
}
