//! Services module
//!
//! Request-level operations used by the HTTP handlers. Each service owns the
//! core components it needs and shares the store behind an `Arc`.

pub mod agents;
pub mod lists;

pub use agents::AgentService;
pub use lists::{ListService, UploadOutcome, UploadedFile};
