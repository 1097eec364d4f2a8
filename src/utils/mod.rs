//! Utility modules for the dispatch service

pub mod error;
