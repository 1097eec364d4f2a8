//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{DispatchError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/leads.yaml";

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| DispatchError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Load configuration from `path`, or from defaults plus environment when the
/// file does not exist
pub async fn load_config(path: Option<&str>) -> Result<Config> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if Path::new(path).exists() {
        info!("Loading configuration file: {}", path);
        Config::from_file(path).await
    } else {
        warn!(
            "Configuration file {} not found, using defaults and environment",
            path
        );
        Config::from_env()
    }
}

/// Run the server with configuration loaded from `config_path`
pub async fn run_server(config_path: Option<&str>) -> Result<()> {
    info!("Starting {} v{}", crate::NAME, crate::VERSION);

    let config = load_config(config_path).await?;
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("Server starting at: http://{}", server.config().address());
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/lists/upload - Upload and distribute a list");
    info!("   GET    /api/lists - Batches and per-agent totals");
    info!("   GET    /api/lists/agent/{{agentId}} - Agent detail");
    info!("   GET    /api/lists/batch/{{batchId}} - Batch detail");
    info!("   *      /api/agents - Agent management");

    server.start().await
}
