//! Kamnav Core — shared errors and configuration.
//!
//! This crate provides the foundational types used across all kamnav crates.
//! It has no internal kamnav dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Persisted web-service configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::Configuration;
pub use error::{Error, Result};
