//! Configuration module for stagehand projects
//!
//! Provides types and parsing for `stagehand.toml` project manifests.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
