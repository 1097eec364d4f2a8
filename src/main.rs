//! lead-dispatch - lead list upload and distribution service

#![allow(missing_docs)]

use clap::Parser;
use lead_dispatch::server;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lead-dispatch", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "LEADS_CONFIG")]
    config: Option<String>,

    /// Emit logs as JSON
    #[arg(long, env = "LEADS_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // Initialize logging system
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .init();
    }

    match server::builder::run_server(args.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
