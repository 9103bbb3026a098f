//! SeaORM adapter for the `breeds` table.

use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entities::breeds;

pub async fn list_breeds<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<breeds::Model>, sea_orm::DbErr> {
    breeds::Entity::find().all(conn).await
}

pub async fn find_breed_by_id<C: ConnectionTrait>(
    conn: &C,
    breed_id: &str,
) -> Result<Option<breeds::Model>, sea_orm::DbErr> {
    breeds::Entity::find_by_id(breed_id.to_string())
        .one(conn)
        .await
}
