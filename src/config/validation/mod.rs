//! Configuration validation
//!
//! - `trait_def`: core `Validate` trait definition
//! - `config_validators`: validators for the server, storage and upload sections

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
