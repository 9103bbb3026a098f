use dog_bff::adapters::pets_sea::{self, PetCreate};
use dog_bff::errors::domain::{DomainError, NotFoundKind};
use dog_bff::infra::db_errors::map_db_err;
use dog_bff::store::PetStore;
use time::macros::date;

use crate::support::fixtures::{breed1, golden_retriever};
use crate::support::stores::sql_store;

#[tokio::test]
async fn test_get_pets_on_empty_table_is_empty() {
    let store = sql_store(&[breed1()]).await.unwrap();
    assert!(store.get_pets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_pet_embeds_fetched_breed() {
    let store = sql_store(&[breed1()]).await.unwrap();

    let pet = store
        .create_pet("Fido", date!(2020 - 01 - 01), "b1")
        .await
        .unwrap();

    assert_eq!(pet.name, "Fido");
    assert_eq!(pet.birth, date!(2020 - 01 - 01));
    assert_eq!(pet.breed, breed1());
    assert!(uuid::Uuid::parse_str(&pet.id).is_ok());
}

#[tokio::test]
async fn test_created_pet_reads_back_with_join() {
    let store = sql_store(&[breed1(), golden_retriever()]).await.unwrap();

    let fido = store
        .create_pet("Fido", date!(2020 - 01 - 01), "b1")
        .await
        .unwrap();
    let buddy = store
        .create_pet("Buddy", date!(2019 - 06 - 15), "golden-retriever")
        .await
        .unwrap();

    assert_eq!(store.get_pet_by_id(&fido.id).await.unwrap(), fido);
    assert_eq!(store.get_pet_by_id(&buddy.id).await.unwrap(), buddy);

    let mut all = store.get_pets().await.unwrap();
    all.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(all, vec![buddy, fido]);
}

#[tokio::test]
async fn test_create_pet_with_unknown_breed_inserts_nothing() {
    let store = sql_store(&[breed1()]).await.unwrap();

    let err = store
        .create_pet("Ghost", date!(2021 - 03 - 04), "no-such-breed")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Breed, _)));
    assert!(store.get_pets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_pet_by_unknown_id_is_not_found() {
    let store = sql_store(&[breed1()]).await.unwrap();

    let err = store.get_pet_by_id("doesnotexist").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Pet, _)));
}

#[tokio::test]
async fn test_delete_pet() {
    let store = sql_store(&[breed1()]).await.unwrap();
    let pet = store
        .create_pet("Fido", date!(2020 - 01 - 01), "b1")
        .await
        .unwrap();

    store.delete_pet(&pet.id).await.unwrap();
    assert!(store.get_pet_by_id(&pet.id).await.unwrap_err().is_not_found());

    // Nothing left to remove the second time.
    let err = store.delete_pet(&pet.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Pet, _)));
}

#[tokio::test]
async fn test_raw_insert_with_dangling_breed_is_fk_violation() {
    let store = sql_store(&[breed1()]).await.unwrap();

    // Bypasses the store's breed check so the schema constraint fires.
    let err = pets_sea::insert_pet(
        store.connection(),
        PetCreate {
            id: "p-dangling".to_string(),
            name: "Ghost".to_string(),
            birth: date!(2021 - 03 - 04),
            breed_id: "no-such-breed".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(map_db_err(err), DomainError::ForeignKeyViolation(_)));
    assert!(store.get_pets().await.unwrap().is_empty());
}
