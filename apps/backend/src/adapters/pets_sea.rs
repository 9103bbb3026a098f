//! SeaORM adapter for the `pets` table.
//!
//! Reads always inner-join `breeds` so each row carries its full breed.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect,
    RelationTrait, Select, SelectTwo, Set,
};
use sea_orm::sea_query::JoinType;

use crate::entities::{breeds, pets};

/// Prefix for `DbErr::Custom` raised when a joined row is missing its breed.
pub const DATA_CORRUPTION_PREFIX: &str = "DATA_CORRUPTION:";

#[derive(Debug, Clone)]
pub struct PetCreate {
    pub id: String,
    pub name: String,
    pub birth: time::Date,
    pub breed_id: String,
}

fn pets_with_breeds(select: Select<pets::Entity>) -> SelectTwo<pets::Entity, breeds::Entity> {
    select
        .join(JoinType::InnerJoin, pets::Relation::Breed.def())
        .select_also(breeds::Entity)
}

fn require_breed(
    row: (pets::Model, Option<breeds::Model>),
) -> Result<(pets::Model, breeds::Model), sea_orm::DbErr> {
    match row {
        (pet, Some(breed)) => Ok((pet, breed)),
        (pet, None) => Err(sea_orm::DbErr::Custom(format!(
            "{DATA_CORRUPTION_PREFIX}pet {} joined without breed {}",
            pet.id, pet.breed_id
        ))),
    }
}

pub async fn list_pets_with_breeds<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<(pets::Model, breeds::Model)>, sea_orm::DbErr> {
    pets_with_breeds(pets::Entity::find())
        .all(conn)
        .await?
        .into_iter()
        .map(require_breed)
        .collect()
}

pub async fn find_pet_with_breed<C: ConnectionTrait>(
    conn: &C,
    pet_id: &str,
) -> Result<Option<(pets::Model, breeds::Model)>, sea_orm::DbErr> {
    pets_with_breeds(pets::Entity::find().filter(pets::Column::Id.eq(pet_id)))
        .one(conn)
        .await?
        .map(require_breed)
        .transpose()
}

/// Insert a pet; the stored row (read back with `RETURNING`) is returned.
pub async fn insert_pet<C: ConnectionTrait>(
    conn: &C,
    dto: PetCreate,
) -> Result<pets::Model, sea_orm::DbErr> {
    let pet_active = pets::ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        birth: Set(dto.birth),
        breed_id: Set(dto.breed_id),
    };

    pet_active.insert(conn).await
}

/// Delete a pet by id, returning the number of rows removed.
pub async fn delete_pet<C: ConnectionTrait>(
    conn: &C,
    pet_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = pets::Entity::delete_by_id(pet_id.to_string())
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
