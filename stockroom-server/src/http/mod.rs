//! HTTP adapter: routing, extractor configuration and handlers.

use actix_web::{web, HttpResponse};

pub mod envelope;
pub mod error;
pub mod feedback;
pub mod index;
pub mod inventory;
pub mod schemas;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;

/// Register every route on `cfg`.
///
/// `/api/inventory/search` is registered ahead of `/api/inventory/{id}` so the
/// literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(index::api_info)
        .service(index::api_spec)
        .service(inventory::list_inventory)
        .service(inventory::search_inventory)
        .service(inventory::get_inventory_item)
        .service(inventory::create_inventory_item)
        .service(inventory::update_inventory_item)
        .service(inventory::delete_inventory_item)
        .service(feedback::list_feedback)
        .service(feedback::get_feedback_item)
        .service(feedback::create_feedback);
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(envelope::Envelope::failure(
        "Resource not found".to_string(),
        None,
    ))
}
