//! Error handling for the dispatch service
//!
//! This module defines the error type shared by the ingestion pipeline, the
//! storage backends and the HTTP layer, together with its HTTP mapping.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{DispatchError, Result, ValidationError};
