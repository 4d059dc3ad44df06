//! Inventory endpoints.
//!
//! ```text
//! GET    /api/inventory
//! GET    /api/inventory/search?q=term
//! GET    /api/inventory/{id}
//! POST   /api/inventory
//! PUT    /api/inventory/{id}
//! DELETE /api/inventory/{id}
//! ```
//!
//! Mutations run on the blocking pool: a save may wait on the data file lock.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use stockroom_core::{validation, NewInventoryItem};

use super::envelope::Envelope;
use super::error::{ApiError, ApiResult};
use super::schemas::{ErrorResponse, InventoryItemResponse, InventoryListResponse};
use super::state::HttpState;

/// Body for creating or replacing an inventory item. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct InventoryItemRequest {
    /// Name of the inventory item
    #[schema(example = "Laptop")]
    pub name: String,
    /// Detailed description of the item
    #[schema(example = "High-performance laptop for business use")]
    pub description: String,
    /// Available quantity
    #[schema(example = 15, minimum = 0)]
    pub quantity: i64,
    /// Price per unit
    #[schema(example = 1299.99, minimum = 0)]
    pub price: f64,
}

impl From<InventoryItemRequest> for NewInventoryItem {
    fn from(request: InventoryItemRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term to match against item name or description
    #[param(example = "laptop")]
    pub q: Option<String>,
}

/// Checks the body at the boundary so bad input never reaches the store
fn validated(request: InventoryItemRequest) -> ApiResult<NewInventoryItem> {
    let input = NewInventoryItem::from(request);
    validation::inventory(&input)?;
    Ok(input)
}

/// List all inventory items.
#[utoipa::path(
    get,
    path = "/api/inventory",
    responses(
        (status = 200, description = "Successfully retrieved inventory items", body = InventoryListResponse)
    ),
    tag = "Inventory",
    operation_id = "listInventory"
)]
#[get("/api/inventory")]
pub async fn list_inventory(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::list(state.inventory.list_all()))
}

/// Search inventory items by name or description.
#[utoipa::path(
    get,
    path = "/api/inventory/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Successfully retrieved search results", body = InventoryListResponse),
        (status = 400, description = "Missing search query parameter", body = ErrorResponse)
    ),
    tag = "Inventory",
    operation_id = "searchInventory"
)]
#[get("/api/inventory/search")]
pub async fn search_inventory(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let term = query
        .into_inner()
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request(r#"Search query parameter "q" is required"#))?;

    Ok(HttpResponse::Ok().json(Envelope::list(state.inventory.search(&term))))
}

/// Get a specific inventory item.
#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    params(("id" = u64, Path, description = "Unique identifier of the inventory item", example = 1)),
    responses(
        (status = 200, description = "Successfully retrieved inventory item", body = InventoryItemResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    tag = "Inventory",
    operation_id = "getInventoryItem"
)]
#[get("/api/inventory/{id}")]
pub async fn get_inventory_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let item = state.inventory.get(id.into_inner())?;
    Ok(HttpResponse::Ok().json(Envelope::data(item)))
}

/// Create a new inventory item.
#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = InventoryItemRequest,
    responses(
        (status = 201, description = "Inventory item created successfully", body = InventoryItemResponse),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Inventory",
    operation_id = "createInventoryItem"
)]
#[post("/api/inventory")]
pub async fn create_inventory_item(
    state: web::Data<HttpState>,
    payload: web::Json<InventoryItemRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(payload.into_inner())?;
    let item = web::block(move || state.inventory.create(input)).await??;
    Ok(HttpResponse::Created().json(Envelope::with_message(
        "Inventory item created successfully",
        item,
    )))
}

/// Update all fields of an existing inventory item.
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    params(("id" = u64, Path, description = "Unique identifier of the inventory item", example = 1)),
    request_body = InventoryItemRequest,
    responses(
        (status = 200, description = "Inventory item updated successfully", body = InventoryItemResponse),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Inventory",
    operation_id = "updateInventoryItem"
)]
#[put("/api/inventory/{id}")]
pub async fn update_inventory_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
    payload: web::Json<InventoryItemRequest>,
) -> ApiResult<HttpResponse> {
    let input = validated(payload.into_inner())?;
    let id = id.into_inner();
    let item = web::block(move || state.inventory.update(id, input)).await??;
    Ok(HttpResponse::Ok().json(Envelope::with_message(
        "Inventory item updated successfully",
        item,
    )))
}

/// Remove an inventory item.
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    params(("id" = u64, Path, description = "Unique identifier of the inventory item", example = 1)),
    responses(
        (status = 200, description = "Inventory item deleted successfully", body = InventoryItemResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Inventory",
    operation_id = "deleteInventoryItem"
)]
#[delete("/api/inventory/{id}")]
pub async fn delete_inventory_item(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let item = web::block(move || state.inventory.delete(id)).await??;
    Ok(HttpResponse::Ok().json(Envelope::with_message(
        "Inventory item deleted successfully",
        item,
    )))
}

#[cfg(test)]
mod tests;
