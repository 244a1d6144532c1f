//! Error types for Qdrant REST operations.
//!
//! Every failure is classified into one of three [`ErrorKind`]s. The HTTP
//! status code is `0` whenever no HTTP response was obtained.

use strum::{AsRefStr, Display, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur while talking to Qdrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The request could not be completed at the transport level.
    Network,
    /// A request body could not be encoded or a response body decoded.
    Serialization,
    /// The server answered with a status code of 400 or above.
    Http,
}

/// Structured error returned by every client operation.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]: {message}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// HTTP status code, `0` when no response was received.
    pub status_code: u16,
    /// Decoded response body, when the server sent one.
    pub response: Option<serde_json::Value>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.to_string(),
            status_code: 0,
            response: None,
            source: None,
        }
    }

    /// Creates a new network error.
    pub fn network() -> Self {
        Self::new(ErrorKind::Network)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new HTTP error for the given status code.
    pub fn http(status_code: u16) -> Self {
        Self {
            status_code,
            message: format!("Qdrant API error (HTTP {status_code})"),
            ..Self::new(ErrorKind::Http)
        }
    }

    /// Sets the message of this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches the decoded response body.
    pub fn with_response(mut self, response: serde_json::Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }

    /// Returns the HTTP status code, `0` when no response was received.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the decoded response body attached to this error.
    pub fn response(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()
    }

    /// Returns the `status.error` string reported by Qdrant, if any.
    pub fn api_error(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|body| body.get("status"))
            .and_then(|status| status.get("error"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns `true` if this is a network error.
    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }

    /// Returns `true` if this is a serialization error.
    pub fn is_serialization(&self) -> bool {
        self.kind == ErrorKind::Serialization
    }

    /// Returns `true` if this is an HTTP error.
    pub fn is_http(&self) -> bool {
        self.kind == ErrorKind::Http
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "Request timed out".to_owned()
        } else if error.is_connect() {
            "Connection failed".to_owned()
        } else if error.is_builder() {
            "Failed to initialize HTTP client".to_owned()
        } else {
            error.to_string()
        };

        Self::network().with_message(message).with_source(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization()
            .with_message(format!("JSON error: {error}"))
            .with_source(error)
    }
}
