//! Top-level application configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Application configuration, one section per concern
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Upload handling configuration
    #[serde(default)]
    pub upload: UploadConfig,
}
