//! Error types for the docbridge library.
//!
//! All fatal failures are represented by the [`DocBridgeError`] enum. Only two
//! conditions can fail a build call: the upstream text source cannot be read,
//! or no index backend was recognized at startup. Everything else (bad
//! attribute values, unparseable date strings) is absorbed as a per-attribute
//! diagnostic and never surfaces here.
//!
//! # Examples
//!
//! ```
//! use docbridge::error::{DocBridgeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocBridgeError::backend_not_found("no index library detected"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for docbridge operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the specific error types.
#[derive(Error, Debug)]
pub enum DocBridgeError {
    /// I/O errors from the upstream text source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No supported index-library generation could be bound at startup.
    #[error("Index backend not found: {0}")]
    BackendNotFound(String),
}

/// Result type alias for operations that may fail with DocBridgeError.
pub type Result<T> = std::result::Result<T, DocBridgeError>;

impl DocBridgeError {
    /// Create a new backend-not-found error.
    pub fn backend_not_found<S: Into<String>>(msg: S) -> Self {
        DocBridgeError::BackendNotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DocBridgeError::backend_not_found("no generation recognized");
        assert_eq!(
            error.to_string(),
            "Index backend not found: no generation recognized"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let bridge_error = DocBridgeError::from(io_error);

        match bridge_error {
            DocBridgeError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
