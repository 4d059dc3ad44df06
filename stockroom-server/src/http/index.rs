//! API index and the machine-readable OpenAPI document.

use std::collections::BTreeMap;

use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use utoipa::openapi::OpenApi;
use utoipa::ToSchema;

use super::state::HttpState;

const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /api/inventory", "List all inventory items"),
    (
        "GET /api/inventory/search?q=term",
        "Search inventory items by name or description",
    ),
    ("GET /api/inventory/{id}", "Get a specific inventory item"),
    ("POST /api/inventory", "Create a new inventory item"),
    ("PUT /api/inventory/{id}", "Update an existing inventory item"),
    ("DELETE /api/inventory/{id}", "Delete an inventory item"),
    ("GET /api/feedback", "List all customer feedback"),
    ("GET /api/feedback/{id}", "Get a specific feedback item"),
    ("POST /api/feedback", "Submit new customer feedback"),
];

/// Basic information about the API and where to find things.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "Welcome to the Inventory Management API")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    /// `"METHOD path"` mapped to a short description
    pub endpoints: BTreeMap<String, String>,
    pub documentation: BTreeMap<String, String>,
}

impl ApiInfo {
    /// Index for the API described by `doc`
    fn for_document(doc: &OpenApi) -> Self {
        let endpoints = ENDPOINTS
            .iter()
            .map(|(route, what)| (route.to_string(), what.to_string()))
            .collect();

        let mut documentation = BTreeMap::new();
        documentation.insert(
            "GET /api-spec".to_string(),
            "OpenAPI 3 specification (JSON)".to_string(),
        );

        Self {
            message: "Welcome to the Inventory Management API".to_string(),
            version: doc.info.version.clone(),
            endpoints,
            documentation,
        }
    }
}

/// API information.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information retrieved successfully", body = ApiInfo)
    ),
    tag = "General",
    operation_id = "apiInfo"
)]
#[get("/")]
pub async fn api_info(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiInfo::for_document(&state.openapi))
}

/// OpenAPI document for this server.
#[utoipa::path(
    get,
    path = "/api-spec",
    responses(
        (status = 200, description = "OpenAPI 3 document")
    ),
    tag = "General",
    operation_id = "apiSpec"
)]
#[get("/api-spec")]
pub async fn api_spec(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.openapi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::doc::api_doc;

    fn state(dir: &TempDir, server_url: &str) -> web::Data<HttpState> {
        let stores = stockroom_core::open(dir.path().join("data.json")).expect("open stores");
        web::Data::new(HttpState::new(stores, api_doc(server_url)))
    }

    #[actix_web::test]
    async fn index_lists_every_route() {
        let dir = TempDir::new().unwrap();
        let app = actix_test::init_service(crate::build_app(state(&dir, "http://localhost:3000"))).await;
        let request = actix_test::TestRequest::get().uri("/").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["message"], "Welcome to the Inventory Management API");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["endpoints"].as_object().map(|m| m.len()), Some(ENDPOINTS.len()));
        assert!(body["documentation"]["GET /api-spec"].is_string());
    }

    #[actix_web::test]
    async fn api_spec_serves_document_for_configured_port() {
        let dir = TempDir::new().unwrap();
        let app = actix_test::init_service(crate::build_app(state(&dir, "http://localhost:8080"))).await;
        let request = actix_test::TestRequest::get().uri("/api-spec").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert!(body["openapi"].as_str().is_some_and(|v| v.starts_with("3.")));
        assert_eq!(body["info"]["title"], "Inventory Management API");
        assert_eq!(body["servers"], serde_json::json!([{ "url": "http://localhost:8080" }]));
        assert!(body["paths"]["/api/inventory/search"]["get"].is_object());
    }
}
