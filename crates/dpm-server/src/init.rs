//! Server Initialization
//!
//! Loads configuration, installs logging and builds the application context,
//! then either serves HTTP or resolves a single request file.

use std::path::Path;

use dpm_domain::error::Result;
use dpm_domain::value_objects::{DataRequest, DataResponse};
use dpm_infrastructure::ErrorContext;
use dpm_infrastructure::config::{AppConfig, ConfigLoader};
use dpm_infrastructure::di::{AppContext, init_app};
use dpm_infrastructure::logging::init_logging;
use tracing::info;

use crate::handlers::ServerState;
use crate::transport::http::{HttpServer, HttpServerConfig};

/// Run the Data Product Manager
///
/// With `request_path` the request file is resolved once and the response
/// is printed as pretty JSON; otherwise the HTTP server starts.
pub async fn run(
    config_path: Option<&Path>,
    request_path: Option<&Path>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let context = init_app(config).await?;

    match request_path {
        Some(path) => {
            let response = run_request(&context, path).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        None => Ok(run_server(&context).await?),
    }
}

/// Serve HTTP using the context's configuration
pub async fn run_server(context: &AppContext) -> Result<()> {
    info!(
        host = %context.config.server.host,
        port = context.config.server.port,
        providers = context.catalog().len(),
        "Starting Data Product Manager server"
    );

    let server = HttpServer::new(
        HttpServerConfig::from(&context.config.server),
        ServerState::new(context.collection()),
    );
    server.start().await
}

/// Resolve the JSON request stored at `path`
pub async fn run_request(context: &AppContext, path: &Path) -> Result<DataResponse> {
    let raw = std::fs::read_to_string(path)
        .io_context(format!("Failed to read request file {}", path.display()))?;
    let request: DataRequest = serde_json::from_str(&raw)?;

    info!(
        path = %path.display(),
        requested = request.requested_data_products.len(),
        "Resolving request file"
    );
    context.collection().collect(request).await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
