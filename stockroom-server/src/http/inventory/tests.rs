//! Tests for inventory API handlers.

use super::*;
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;

fn state(dir: &TempDir) -> web::Data<HttpState> {
    let stores = stockroom_core::open(dir.path().join("data.json")).expect("open stores");
    web::Data::new(HttpState::new(stores, crate::doc::api_doc("http://localhost:3000")))
}

fn monitor() -> InventoryItemRequest {
    InventoryItemRequest {
        name: "Monitor".into(),
        description: "27-inch display".into(),
        quantity: 7,
        price: 249.5,
    }
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}

#[actix_web::test]
async fn list_returns_seeded_items_with_count() {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::get().uri("/api/inventory").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["name"], "Laptop");
    assert_eq!(body["data"][2]["id"], 3);
}

#[actix_web::test]
async fn create_returns_201_with_next_id() {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/inventory")
        .set_json(monitor())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Inventory item created successfully",
            "data": {
                "id": 4,
                "name": "Monitor",
                "description": "27-inch display",
                "quantity": 7,
                "price": 249.5
            }
        })
    );
}

#[rstest]
#[case(json!({ "name": "", "description": "d", "quantity": 1, "price": 1.0 }), "name should not be empty")]
#[case(json!({ "name": "n", "description": "d", "quantity": -1, "price": 1.0 }), "quantity must not be less than 0")]
#[case(json!({ "name": "n", "description": "d", "quantity": 1, "price": -0.5 }), "price must not be less than 0")]
#[actix_web::test]
async fn create_rejects_invalid_fields(#[case] payload: Value, #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);
    let app = actix_test::init_service(crate::build_app(state.clone())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/inventory")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["errors"], json!([expected]));
    assert_eq!(state.inventory.next_id(), Some(4));
}

#[rstest]
#[case(json!({ "name": "n", "description": "d", "quantity": 1 }))]
#[case(json!({ "name": "n", "description": "d", "quantity": 1, "price": 1.0, "sku": "x" }))]
#[case(json!({ "name": "n", "description": "d", "quantity": "many", "price": 1.0 }))]
#[actix_web::test]
async fn malformed_bodies_are_rejected(#[case] payload: Value) {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/inventory")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid request body");
}

#[actix_web::test]
async fn get_missing_item_returns_404() {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::get().uri("/api/inventory/99").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Inventory item with ID 99 not found" })
    );
}

#[rstest]
#[case("/api/inventory/abc")]
#[case("/api/inventory/-1")]
#[actix_web::test]
async fn non_numeric_id_is_a_bad_request(#[case] uri: &str) {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Validation failed (numeric string is expected)");
}

#[rstest]
#[case("/api/inventory/search?q=usb", 2)]
#[case("/api/inventory/search?q=USB-C", 1)]
#[case("/api/inventory/search?q=LAPTOP", 1)]
#[case("/api/inventory/search?q=nothing-like-this", 0)]
#[actix_web::test]
async fn search_matches_name_or_description(#[case] uri: &str, #[case] expected: usize) {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["count"], expected);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(expected));
}

#[rstest]
#[case("/api/inventory/search")]
#[case("/api/inventory/search?q=")]
#[actix_web::test]
async fn search_requires_a_term(#[case] uri: &str) {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["error"], r#"Search query parameter "q" is required"#);
}

#[actix_web::test]
async fn update_replaces_every_field() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);
    let app = actix_test::init_service(crate::build_app(state.clone())).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/inventory/1")
        .set_json(monitor())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Inventory item updated successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Monitor");

    let stored = state.inventory.get(1).unwrap();
    assert_eq!(stored.quantity, 7);
    assert_eq!(stored.description, "27-inch display");
}

#[actix_web::test]
async fn update_missing_item_returns_404() {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/inventory/42")
        .set_json(monitor())
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_returns_removed_item_then_404() {
    let dir = TempDir::new().unwrap();
    let app = actix_test::init_service(crate::build_app(state(&dir))).await;

    let request = actix_test::TestRequest::delete().uri("/api/inventory/2").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["message"], "Inventory item deleted successfully");
    assert_eq!(body["data"]["name"], "Wireless Mouse");

    let request = actix_test::TestRequest::delete().uri("/api/inventory/2").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn created_item_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let app = actix_test::init_service(crate::build_app(state(&dir))).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/inventory")
            .set_json(monitor())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let reopened = state(&dir);
    assert_eq!(reopened.inventory.get(4).unwrap().name, "Monitor");
    assert_eq!(reopened.inventory.next_id(), Some(5));
}
