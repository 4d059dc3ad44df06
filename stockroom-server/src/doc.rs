//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every handler annotation and the schema wrappers from
//! [`crate::http::schemas`]. [`api_doc`] adds the server URL of the running
//! process; that document is served at `/api-spec` and may be written to
//! disk at startup for external tooling.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::http::feedback::FeedbackItemRequest;
use crate::http::index::ApiInfo;
use crate::http::inventory::InventoryItemRequest;
use crate::http::schemas::{
    ErrorResponse, FeedbackItemResponse, FeedbackItemSchema, FeedbackListResponse,
    InventoryItemResponse, InventoryItemSchema, InventoryListResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Management API",
        version = "1.0.0",
        description = "A RESTful API for inventory management with CRUD operations, search and customer feedback."
    ),
    paths(
        crate::http::index::api_info,
        crate::http::index::api_spec,
        crate::http::inventory::list_inventory,
        crate::http::inventory::search_inventory,
        crate::http::inventory::get_inventory_item,
        crate::http::inventory::create_inventory_item,
        crate::http::inventory::update_inventory_item,
        crate::http::inventory::delete_inventory_item,
        crate::http::feedback::list_feedback,
        crate::http::feedback::get_feedback_item,
        crate::http::feedback::create_feedback,
    ),
    components(schemas(
        ApiInfo,
        InventoryItemSchema,
        InventoryItemRequest,
        InventoryListResponse,
        InventoryItemResponse,
        FeedbackItemSchema,
        FeedbackItemRequest,
        FeedbackListResponse,
        FeedbackItemResponse,
        ErrorResponse,
    )),
    tags(
        (name = "General", description = "API information"),
        (name = "Inventory", description = "Inventory management endpoints"),
        (name = "Feedback", description = "Customer feedback endpoints")
    )
)]
pub struct ApiDoc;

/// The generated document advertising `server_url` as its only server
pub fn api_doc(server_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(server_url)]);
    doc
}

/// Write the pretty-printed document to `path`, creating parent directories.
pub fn write_openapi(doc: &utoipa::openapi::OpenApi, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(doc).context("Failed to serialize OpenAPI document")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write OpenAPI document to {}", path.display()))
}
