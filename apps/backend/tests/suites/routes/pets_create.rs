use std::sync::Arc;

use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::plain_text::assert_plain_text_error;
use backend_test_support::unique_helpers::unique_str;
use dog_bff::domain::Pet;
use dog_bff::store::{BreedStore, InMemoryStore, PetStore};
use dog_bff::AppState;
use serde_json::json;
use time::macros::date;

use crate::support::create_test_app;
use crate::support::fixtures::{breed1, golden_retriever};
use crate::support::stores::{memory_state, sql_store, FailingStore};

fn create_request(body: serde_json::Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/v1/pets")
        .set_json(body)
        .to_request()
}

#[tokio::test]
async fn test_create_pet_returns_201_with_embedded_breed() {
    let store = Arc::new(InMemoryStore::with_breeds([breed1()]));
    let app = create_test_app(AppState::from_store(store.clone()))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({"name": "Fido", "birth": "2020-01-01", "breedId": "b1"}));
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let pet: Pet = test::read_body_json(resp).await;
    assert_eq!(pet.name, "Fido");
    assert_eq!(pet.birth, date!(2020 - 01 - 01));
    assert_eq!(pet.breed, breed1());
    assert!(!pet.id.is_empty());

    let stored = store.get_pet_by_id(&pet.id).await.unwrap();
    assert_eq!(stored, pet);
}

#[tokio::test]
async fn test_each_created_pet_gets_its_own_id() {
    let store = Arc::new(InMemoryStore::with_breeds([breed1()]));
    let app = create_test_app(AppState::from_store(store.clone()))
        .with_prod_routes()
        .build()
        .await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let name = unique_str("pet");
        let req = create_request(json!({"name": name, "birth": "2020-01-01", "breedId": "b1"}));
        let pet: Pet = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pet.name, name);
        ids.push(pet.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert_eq!(store.get_pets().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_pet_unknown_breed_is_400_and_writes_nothing() {
    let store = Arc::new(InMemoryStore::with_breeds([breed1()]));
    let app = create_test_app(AppState::from_store(store.clone()))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({"name": "Rex", "birth": "2020-01-01", "breedId": "nope"}));
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, StatusCode::BAD_REQUEST, "Error at checking the breed").await;
    assert!(store.get_pets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_pet_bad_birth_is_400() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    for birth in [
        "not-a-date",
        "2020/01/01",
        "2020-13-01",
        "2020-1-1",
        "+2020-01-01",
        "-2020-01-01",
    ] {
        let req = create_request(json!({"name": "Fido", "birth": birth, "breedId": "b1"}));
        let resp = test::call_service(&app, req).await;
        assert_plain_text_error(
            resp,
            StatusCode::BAD_REQUEST,
            "Bad date of birth format. Use YYYY-MM-DD",
        )
        .await;
    }
}

#[tokio::test]
async fn test_create_pet_breed_is_checked_before_birth() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({"name": "Fido", "birth": "not-a-date", "breedId": "nope"}));
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, StatusCode::BAD_REQUEST, "Error at checking the breed").await;
}

#[tokio::test]
async fn test_create_pet_non_json_body_is_400() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pets")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("this is not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get("x-error-code").and_then(|v| v.to_str().ok()),
        Some("INVALID_BODY")
    );
    assert_plain_text_error(
        resp,
        StatusCode::BAD_REQUEST,
        "Error decoding the body of the request",
    )
    .await;
}

#[tokio::test]
async fn test_create_pet_null_body_fails_at_breed_check() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pets")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("null")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, StatusCode::BAD_REQUEST, "Error at checking the breed").await;
}

#[tokio::test]
async fn test_create_pet_ignores_bytes_after_the_json_object() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/pets")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"name":"Fido","birth":"2020-01-01","breedId":"b1"} extra"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_pet_missing_fields_fail_at_breed_check() {
    let app = create_test_app(memory_state(InMemoryStore::with_breeds([breed1()])))
        .with_prod_routes()
        .build()
        .await;

    // Absent fields decode as empty strings; "" is not a known breed.
    let req = create_request(json!({"name": "Fido"}));
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, StatusCode::BAD_REQUEST, "Error at checking the breed").await;
}

#[tokio::test]
async fn test_create_pet_breed_store_outage_is_reported_as_400() {
    let app = create_test_app(AppState::from_store(Arc::new(FailingStore)))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({"name": "Fido", "birth": "2020-01-01", "breedId": "b1"}));
    let resp = test::call_service(&app, req).await;

    assert_plain_text_error(resp, StatusCode::BAD_REQUEST, "Error at checking the breed").await;
}

#[tokio::test]
async fn test_create_pet_persist_failure_is_500() {
    let breeds: Arc<dyn BreedStore> = Arc::new(InMemoryStore::with_breeds([breed1()]));
    let pets: Arc<dyn PetStore> = Arc::new(FailingStore);
    let app = create_test_app(AppState::new(breeds, pets))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({"name": "Fido", "birth": "2020-01-01", "breedId": "b1"}));
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get("x-error-code").and_then(|v| v.to_str().ok()),
        Some("PET_CREATE_FAILED")
    );
    assert_plain_text_error(resp, StatusCode::INTERNAL_SERVER_ERROR, "Error creating pet").await;
}

#[tokio::test]
async fn test_create_then_read_back_over_sqlite() {
    let store = Arc::new(sql_store(&[golden_retriever()]).await.unwrap());
    let app = create_test_app(AppState::from_store(store))
        .with_prod_routes()
        .build()
        .await;

    let req = create_request(json!({
        "name": "Buddy",
        "birth": "2019-06-15",
        "breedId": "golden-retriever",
    }));
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Pet = test::read_body_json(resp).await;
    assert_eq!(created.breed, golden_retriever());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/pets/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Pet = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::get().uri("/api/v1/pets").to_request();
    let all: Vec<Pet> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all, vec![created]);
}
