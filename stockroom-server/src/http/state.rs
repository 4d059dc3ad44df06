//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`; the stores and the
//! OpenAPI document inside are constructed once at startup and live for the
//! whole process.

use utoipa::openapi::OpenApi;

use stockroom_core::{FeedbackStore, InventoryStore, Stores};

/// Dependency bundle for HTTP handlers.
pub struct HttpState {
    pub inventory: InventoryStore,
    pub feedback: FeedbackStore,
    /// Served at `/api-spec`, with the server URL of this process
    pub openapi: OpenApi,
}

impl HttpState {
    pub fn new(stores: Stores, openapi: OpenApi) -> Self {
        Self {
            inventory: stores.inventory,
            feedback: stores.feedback,
            openapi,
        }
    }
}
