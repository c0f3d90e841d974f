//! Error types for kamnav-details

use thiserror::Error;

/// Result type alias for kamnav-details operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kamnav-details
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kamnav-core
    #[error("Core error: {0}")]
    Core(#[from] kamnav_core::Error),

    /// Error from the remote KAM service client
    #[error("Service error: {0}")]
    Client(#[from] kamnav_client::Error),
}
