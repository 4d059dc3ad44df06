//! HTTP server for the stockroom inventory and feedback backend.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

pub mod cli;
pub mod doc;
pub mod http;
pub mod telemetry;

pub use http::HttpState;

/// Build the application with every route and the 404 fallback.
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .configure(http::configure)
        .default_service(web::route().to(http::not_found))
}
