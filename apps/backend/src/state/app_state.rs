use std::fmt;
use std::sync::Arc;

use crate::store::{BreedStore, PetStore};

/// Application state shared by every worker: the injected stores.
///
/// Handlers reach persistence only through these trait objects.
#[derive(Clone)]
pub struct AppState {
    breeds: Arc<dyn BreedStore>,
    pets: Arc<dyn PetStore>,
}

impl AppState {
    pub fn new(breeds: Arc<dyn BreedStore>, pets: Arc<dyn PetStore>) -> Self {
        Self { breeds, pets }
    }

    /// Use one store for both capabilities.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: BreedStore + PetStore + 'static,
    {
        Self {
            breeds: store.clone(),
            pets: store,
        }
    }

    pub fn breeds(&self) -> &dyn BreedStore {
        self.breeds.as_ref()
    }

    pub fn pets(&self) -> &dyn PetStore {
        self.pets.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
