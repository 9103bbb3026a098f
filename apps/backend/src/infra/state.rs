use std::sync::Arc;

use crate::config::DbConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::store::{BreedStore, InMemoryStore, PetStore, SqlStore};

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    db: Option<DbConfig>,
    breeds: Option<Arc<dyn BreedStore>>,
    pets: Option<Arc<dyn PetStore>>,
}

/// What `StateBuilder::build` produced.
///
/// `sql` is the relational store when one was connected; the caller owns its
/// shutdown via [`SqlStore::close`].
pub struct BuiltState {
    pub state: AppState,
    pub sql: Option<SqlStore>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a relational store for whichever capability is not overridden.
    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db = Some(config);
        self
    }

    pub fn with_breed_store(mut self, store: Arc<dyn BreedStore>) -> Self {
        self.breeds = Some(store);
        self
    }

    pub fn with_pet_store(mut self, store: Arc<dyn PetStore>) -> Self {
        self.pets = Some(store);
        self
    }

    pub async fn build(self) -> Result<BuiltState, AppError> {
        let sql = match self.db {
            Some(config) => Some(SqlStore::connect(&config).await?),
            None => None,
        };

        // Without a database the fallback is one shared in-memory store.
        let (default_breeds, default_pets) = match &sql {
            Some(store) => {
                let shared = Arc::new(store.clone());
                (
                    shared.clone() as Arc<dyn BreedStore>,
                    shared as Arc<dyn PetStore>,
                )
            }
            None => {
                let shared = Arc::new(InMemoryStore::new());
                (
                    shared.clone() as Arc<dyn BreedStore>,
                    shared as Arc<dyn PetStore>,
                )
            }
        };

        Ok(BuiltState {
            state: AppState::new(
                self.breeds.unwrap_or(default_breeds),
                self.pets.unwrap_or(default_pets),
            ),
            sql,
        })
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
