//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

pub mod app;
pub mod server;
pub mod storage;
pub mod upload;

// Re-export all configuration types
pub use app::*;
pub use server::*;
pub use storage::*;
pub use upload::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default client request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum upload size in bytes
pub fn default_max_file_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_database_url() -> String {
    "sqlite://data/leads.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_true() -> bool {
    true
}
