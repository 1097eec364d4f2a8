//! Error types for the dispatch service

use thiserror::Error;

/// Result type alias for the dispatch service
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Main error type for the dispatch service
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The uploaded file could not be decoded
    #[error("Failed to parse file: {0}")]
    Parse(String),

    /// The decoded rows do not satisfy the column requirements
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The declared upload content type is not accepted
    #[error("File type not supported: {0}. Please upload CSV, XLS, or XLSX files only.")]
    UnsupportedType(String),

    /// Distribution attempted while no agent is registered
    #[error("No agents found to distribute items")]
    NoAgents,

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// Bad request errors
    #[error("{0}")]
    BadRequest(String),

    /// Conflicting concurrent modification
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Row validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The file contained a header at most, no data rows
    #[error("No data found in the file")]
    EmptyFile,

    /// One or more mandatory columns are absent from the header
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
