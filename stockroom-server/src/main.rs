use actix_web::{web, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use stockroom_server::cli::Cli;
use stockroom_server::{build_app, doc, telemetry, HttpState};

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_json);

    let stores = stockroom_core::open(&cli.data_file)
        .with_context(|| format!("Failed to open data file {}", cli.data_file.display()))?;

    let server_url = cli.server_url();
    let openapi = doc::api_doc(&server_url);

    if let Some(path) = cli.openapi_output() {
        doc::write_openapi(&openapi, path)?;
        info!(path = %path.display(), "OpenAPI document written");
    }

    let state = web::Data::new(HttpState::new(stores, openapi));

    info!(host = %cli.host, port = cli.port, "Inventory Management API listening");
    info!("API index at {server_url}/");
    info!("OpenAPI document at {server_url}/api-spec");

    HttpServer::new(move || build_app(state.clone()))
        .bind((cli.host.as_str(), cli.port))
        .with_context(|| format!("Failed to bind {}:{}", cli.host, cli.port))?
        .run()
        .await
        .context("HTTP server terminated with an error")
}
