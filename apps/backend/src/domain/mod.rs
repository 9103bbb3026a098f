//! Domain layer: the records this service hands to its frontend.

pub mod birth;

use serde::{Deserialize, Serialize};
use time::Date;

pub use birth::parse_birth_date;

/// A dog breed. Breeds are seeded out of band and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub temperament: String,
    pub origin: String,
}

/// A pet with its breed denormalized into every representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    #[serde(with = "birth::birth_format")]
    pub birth: Date,
    pub breed: Breed,
}

/// Body of `POST /api/v1/pets`.
///
/// Missing fields decode as empty strings; the creation flow rejects them at
/// the breed or date gate instead of at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: String,
    pub birth: String,
    pub breed_id: String,
}
