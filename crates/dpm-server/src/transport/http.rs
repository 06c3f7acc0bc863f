//! HTTP transport
//!
//! Mounts the data routes and JSON catchers on a Rocket instance and runs it
//! on the configured address.
//!
//! # Example
//!
//! ```text
//! POST /data/collect HTTP/1.1
//! Content-Type: application/json
//!
//! {
//!     "requestedDataProducts": {
//!         "se.iqesolutions.datamanager.product.impl.StockScore": {
//!             "maxCost": 1.0,
//!             "maxTime": 5.0
//!         }
//!     },
//!     "alreadyAvailableDataProducts": [
//!         {
//!             "@class": "se.iqesolutions.datamanager.product.impl.TickerSymbol",
//!             "symbol": "NOK"
//!         }
//!     ]
//! }
//! ```

use crate::handlers::{ServerState, collect, discovery, errors, health};
use dpm_domain::error::{Error, Result};
use dpm_infrastructure::config::ServerConfig;
use rocket::{Build, Rocket, catchers, routes};
use tracing::info;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HttpServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl From<&ServerConfig> for HttpServerConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

/// Build the Rocket application
pub fn build_rocket(state: ServerState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/",
            routes![
                collect::collect,
                discovery::product_types,
                discovery::providers,
                health::health
            ],
        )
        .register(
            "/",
            catchers![
                errors::bad_request,
                errors::not_found,
                errors::unprocessable,
                errors::internal_error
            ],
        )
}

/// HTTP server
pub struct HttpServer {
    config: HttpServerConfig,
    state: ServerState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: HttpServerConfig, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application with the configured address
    pub fn rocket(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        build_rocket(self.state.clone()).configure(figment)
    }

    /// Serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<()> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            "HTTP server listening"
        );

        self.rocket()
            .launch()
            .await
            .map_err(|e| Error::infrastructure(format!("Rocket launch failed: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
