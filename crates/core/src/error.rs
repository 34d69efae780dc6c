//! Error types for unshort-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.
//! Failures are tagged by kind instead of being told apart by message text.

use thiserror::Error;

/// Result type alias for unshort-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for unshort-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input string is not a usable absolute URL
    #[error("Invalid URL: {input}")]
    InvalidUrl {
        input: String,
        #[source]
        reason: InvalidUrlReason,
    },

    /// The request (or anything after it) failed
    #[error("Failed to expand URL: {source}")]
    ResolutionFailed {
        url: String,
        #[source]
        source: TransportError,
    },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Discriminant of [`Error`], for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    ResolutionFailed,
    Client,
    Config,
}

impl Error {
    /// Build an [`Error::InvalidUrl`] for the given input
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<InvalidUrlReason>) -> Self {
        Error::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`Error::ResolutionFailed`] for the given input
    pub fn resolution_failed(url: impl Into<String>, source: TransportError) -> Self {
        Error::ResolutionFailed {
            url: url.into(),
            source,
        }
    }

    /// Get the kind tag of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Error::ResolutionFailed { .. } => ErrorKind::ResolutionFailed,
            Error::Client(_) => ErrorKind::Client,
            Error::Config(_) | Error::Io(_) | Error::TomlParse(_) | Error::TomlSerialize(_) => {
                ErrorKind::Config
            }
        }
    }

    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidUrl | ErrorKind::Config => 2, // UsageError
            ErrorKind::ResolutionFailed => 3,               // NetworkError
            ErrorKind::Client => 1,                         // GeneralError
        }
    }
}

/// Why an input string was rejected before any network access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// The string does not parse as an absolute URL
    #[error(transparent)]
    Parse(#[from] url::ParseError),

    /// The URL parses but carries no authority to send a request to
    #[error("URL has no host")]
    MissingHost,
}

/// Failure reported by a [`crate::RedirectFollower`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

/// Coarse classification of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS lookup, connection refused, TLS handshake
    Connect,
    /// Request did not complete in time
    Timeout,
    /// Redirect limit exceeded or loop detected
    Redirect,
    /// Request could not be sent or the response was unusable
    Request,
    Other,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
