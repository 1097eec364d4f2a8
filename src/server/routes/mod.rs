//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod agents;
pub mod lists;

use crate::utils::error::{DispatchError, Result};
use uuid::Uuid;

/// Parse an agent id from a path segment; malformed ids cannot exist, so
/// they are reported as not found
pub(crate) fn parse_agent_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DispatchError::not_found("Agent not found"))
}
