//! Error types for kamnav-graph

use thiserror::Error;

/// Result type alias for kamnav-graph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kamnav-graph
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kamnav-core
    #[error("Core error: {0}")]
    Core(#[from] kamnav_core::Error),

    /// Error from the remote KAM service client
    #[error("Service error: {0}")]
    Client(#[from] kamnav_client::Error),

    /// Expansion was requested with no input nodes
    #[error("Expansion requires at least one input node")]
    EmptyInput,
}
