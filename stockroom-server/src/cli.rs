use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Inventory and customer feedback API backed by a JSON file")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[clap(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path to the JSON data file shared by inventory and feedback
    #[clap(long, env = "STOCKROOM_DATA_FILE", default_value = "data.json")]
    pub data_file: PathBuf,

    /// Where to write the OpenAPI document at startup
    #[clap(long, env = "STOCKROOM_OPENAPI_FILE", default_value = "openapi.json")]
    pub openapi_file: PathBuf,

    /// Do not write the OpenAPI document to disk
    #[clap(long)]
    pub no_openapi_file: bool,

    /// Emit log lines as JSON
    #[clap(long)]
    pub log_json: bool,
}

impl Cli {
    /// Base URL advertised in the OpenAPI document
    pub fn server_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Path for the OpenAPI document, unless writing it is disabled
    pub fn openapi_output(&self) -> Option<&Path> {
        if self.no_openapi_file {
            None
        } else {
            Some(&self.openapi_file)
        }
    }
}
