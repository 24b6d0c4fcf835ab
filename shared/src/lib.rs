//! # Anteroom Shared
//!
//! Cross-cutting types and utilities shared by the Anteroom backend crates:
//! configuration structs, response wire types, and validation helpers.

pub mod config;
pub mod types;
pub mod utils;
