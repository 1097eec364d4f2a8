//! Configuration management for the dispatch service
//!
//! Configuration is read from a YAML file and then overlaid with environment
//! variables, so container deployments can override single values.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{DispatchError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DispatchError::Config(format!("Failed to read config file: {}", e)))?;

        let app: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| DispatchError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app }.with_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LEADS_*` and `DATABASE_*` environment variables
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(host) = env::var("LEADS_HOST") {
            self.app.server.host = host;
        }
        if let Ok(port) = env::var("LEADS_PORT") {
            self.app.server.port = parse_env("LEADS_PORT", &port)?;
        }
        if let Ok(workers) = env::var("LEADS_WORKERS") {
            self.app.server.workers = Some(parse_env("LEADS_WORKERS", &workers)?);
        }
        if let Ok(max_file_size) = env::var("LEADS_MAX_FILE_SIZE") {
            self.app.upload.max_file_size = parse_env("LEADS_MAX_FILE_SIZE", &max_file_size)?;
        }
        if let Ok(db_url) = env::var("DATABASE_URL") {
            self.app.storage.database.url = db_url;
            self.app.storage.database.enabled = true;
        }
        if let Ok(max_conn) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.app.storage.database.max_connections =
                parse_env("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }
        if let Ok(enabled) = env::var("DATABASE_ENABLED") {
            self.app.storage.database.enabled = parse_env("DATABASE_ENABLED", &enabled)?;
        }
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get upload configuration
    pub fn upload(&self) -> &UploadConfig {
        &self.app.upload
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        Validate::validate(&self.app.server)
            .map_err(|e| DispatchError::Config(format!("Server config error: {}", e)))?;

        self.app
            .server
            .cors
            .validate()
            .map_err(|e| DispatchError::Config(format!("CORS config error: {}", e)))?;

        Validate::validate(&self.app.storage)
            .map_err(|e| DispatchError::Config(format!("Storage config error: {}", e)))?;

        Validate::validate(&self.app.upload)
            .map_err(|e| DispatchError::Config(format!("Upload config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| DispatchError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| DispatchError::Config(format!("Invalid {}: {}", name, e)))
}
