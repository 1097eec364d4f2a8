//! Integration tests for lead-dispatch
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod api_tests;
pub mod config_tests;
pub mod distribution_tests;
