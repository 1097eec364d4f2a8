//! Core functionality for the dispatch service
//!
//! This module contains the ingestion pipeline and its domain types:
//! - `ingest`: tabular parsing and row validation
//! - `distribution`: round-robin assignment of rows to agents
//! - `aggregate`: batch registry and assignment summaries
//! - `models`: domain records shared by every layer

pub mod aggregate;
pub mod distribution;
pub mod ingest;
pub mod models;
