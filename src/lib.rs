//! # lead-dispatch
//!
//! Lead list ingestion service. Administrators register sales agents, upload
//! spreadsheets of leads (CSV, XLS or XLSX) and every row is handed to exactly
//! one agent, round-robin, so agents' counts never differ by more than one.
//!
//! ## Pipeline
//!
//! - **Ingest**: one [`TabularParser`](core::ingest::TabularParser) per format
//!   turns the upload into header-keyed rows; the validator checks the
//!   `FirstName` and `Phone` columns.
//! - **Distribute**: rows are assigned against a single agent snapshot and the
//!   whole batch is committed atomically.
//! - **Aggregate**: batches, per-agent totals and per-agent detail views.
//!
//! ## Running
//!
//! ```rust,no_run
//! use lead_dispatch::{Config, LeadDispatch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/leads.yaml").await?;
//!     let service = LeadDispatch::new(config).await?;
//!     service.run().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::distribution::{Distribution, Distributor};
pub use core::models::{Agent, LeadRow, ListItem};
pub use services::{AgentService, ListService};
pub use storage::{LeadStore, MemoryStore};
pub use utils::error::{DispatchError, Result};

use tracing::info;

/// Lead dispatch service
pub struct LeadDispatch {
    config: Config,
    server: server::HttpServer,
}

impl LeadDispatch {
    /// Create a new service instance, opening storage
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new lead dispatch instance");

        let server = server::HttpServer::new(&config).await?;
        Ok(Self { config, server })
    }

    /// Run the service until shutdown
    pub async fn run(self) -> Result<()> {
        info!(
            "Starting lead dispatch on {}",
            self.config.server().address()
        );
        self.server.start().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Service version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Service description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
