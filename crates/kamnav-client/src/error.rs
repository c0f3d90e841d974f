//! Error types for kamnav-client

use thiserror::Error;

/// Result type alias for kamnav-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kamnav-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from kamnav-core
    #[error("Core error: {0}")]
    Core(#[from] kamnav_core::Error),

    /// HTTP transport error (connect failure, timeout, bad URL)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service error ({status}): {message}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },
}

impl Error {
    /// Creates a service error from a status code and message.
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = Error::service(503, "maintenance window");
        assert_eq!(
            err.to_string(),
            "Service error (503): maintenance window"
        );
    }
}
