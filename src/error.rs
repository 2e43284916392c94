//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report. Most analytics never fail: an empty record
//! set degrades to zero-valued results instead of an error.
//!
//! # Taxonomy
//!
//! | Variant | Raised by | Fatal? |
//! |---------|-----------|--------|
//! | [`MalformedTimestamp`](ChatlensError::MalformedTimestamp) | parser in strict mode | only in strict mode |
//! | [`MissingResource`](ChatlensError::MissingResource) | stop-word loading | only for word analyses |
//! | [`Io`](ChatlensError::Io) | file input/output | yes |
//! | [`InvalidFormat`](ChatlensError::InvalidFormat) | output format selection | yes |

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A bracketed timestamp token did not form a valid calendar date/time.
    ///
    /// In the default (lenient) parser mode such records are dropped and
    /// counted instead of surfacing this error.
    #[error("Malformed timestamp '{token}': {source}")]
    MalformedTimestamp {
        /// The captured token, e.g. `31/02/23, 10:00:00`
        token: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A required auxiliary resource (the stop-word list) could not be loaded.
    #[error("Missing resource '{}': {source}", path.display())]
    MissingResource {
        /// Path that was tried
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The requested format is not supported.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(token: impl Into<String>, source: chrono::ParseError) -> Self {
        ChatlensError::MalformedTimestamp {
            token: token.into(),
            source,
        }
    }

    /// Creates a missing resource error.
    pub fn missing_resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::MissingResource {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a malformed timestamp error.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatlensError::MalformedTimestamp { .. })
    }

    /// Returns `true` if a required resource could not be loaded.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatlensError::MissingResource { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}
