/*!
 * Error types for the textrans application.
 *
 * This module contains custom error types for the different layers of the
 * application, using the thiserror crate for ergonomic error definitions:
 * - `ProviderError`: transport failures talking to a translation/detection provider
 * - `BackendError`: structured failures returned by every backend operation
 * - `AppError`: failures at the orchestration boundary (config, files, backend selection)
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// The provider cannot serve this request at all
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Discriminant of a `BackendError`, for callers that only care about the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyArgument,
    EmptyText,
    UnknownLanguage,
    Unsupported,
    ProviderFailure,
    IoFailure,
}

/// Failures returned by translation backend operations
///
/// Nothing escapes a backend operation except through this type: provider
/// and I/O faults are caught at the call site and converted.
#[derive(Error, Debug)]
pub enum BackendError {
    /// A language token was empty after trimming
    #[error("empty argument")]
    EmptyArgument,

    /// The text to translate or detect was empty after trimming
    #[error("empty text")]
    EmptyText,

    /// The token matched neither a name nor a code in the language table
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The backend does not offer the requested capability
    #[error("{operation} is not supported by the {backend} backend")]
    Unsupported {
        /// Backend identifier
        backend: &'static str,
        /// Name of the missing operation
        operation: &'static str,
    },

    /// The provider failed; carries its message verbatim
    #[error("{0}")]
    ProviderFailure(String),

    /// Writing a listing file failed
    #[error("I/O failure: {0}")]
    IoFailure(String),
}

impl BackendError {
    /// Category of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyArgument => ErrorKind::EmptyArgument,
            Self::EmptyText => ErrorKind::EmptyText,
            Self::UnknownLanguage(_) => ErrorKind::UnknownLanguage,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::ProviderFailure(_) => ErrorKind::ProviderFailure,
            Self::IoFailure(_) => ErrorKind::IoFailure,
        }
    }
}

impl From<ProviderError> for BackendError {
    fn from(error: ProviderError) -> Self {
        Self::ProviderFailure(error.to_string())
    }
}

impl From<std::io::Error> for BackendError {
    fn from(error: std::io::Error) -> Self {
        Self::IoFailure(error.to_string())
    }
}

impl From<csv::Error> for BackendError {
    fn from(error: csv::Error) -> Self {
        Self::IoFailure(error.to_string())
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The configuration file or its `run` section is absent or unreadable
    #[error("{0}")]
    ConfigurationMissing(String),

    /// Input file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing a file failed
    #[error("{0}")]
    IoFailure(String),

    /// The configured backend identifier is not registered
    #[error("cannot load backend '{0}'")]
    UnknownBackend(String),

    /// Error from a backend operation
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::IoFailure(error.to_string())
    }
}
