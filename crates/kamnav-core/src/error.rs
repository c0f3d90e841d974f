//! Error types for kamnav-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for kamnav-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kamnav-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration problem (bad value, unresolvable config directory).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure with the offending path attached.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// Path the operation was acting on.
        path: PathBuf,
    },

    /// Content that could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A named entity was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of entity (e.g. "node", "edge").
        kind: String,
        /// Identifier that failed to resolve.
        id: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error carrying the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Creates a not-found error for a kind of entity and its identifier.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("bad timeout");
        assert_eq!(err.to_string(), "Configuration error: bad timeout");

        let err = Error::not_found("node", "p(HGNC:AKT1)");
        assert_eq!(err.to_string(), "node not found: p(HGNC:AKT1)");

        let err = Error::parse("unexpected token");
        assert_eq!(err.to_string(), "Parse error: unexpected token");
    }

    #[test]
    fn test_io_error_carries_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(io, "/etc/kamnav/config.toml");
        let msg = err.to_string();
        assert!(msg.contains("/etc/kamnav/config.toml"));
        assert!(msg.contains("denied"));
    }
}
