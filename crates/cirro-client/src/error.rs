//! Error types for cirro-client.

use std::collections::HashMap;

/// Result type alias for cirro-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cirro-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the remote service rejected the call.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api(_))
    }

    /// Returns true if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The rejected call's diagnostic context, if this is a remote rejection.
    pub fn api(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(api) => Some(api),
            _ => None,
        }
    }

    /// The HTTP status of a remote rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        self.api().map(|api| api.status)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Remote service rejected the call (non-success HTTP status).
    #[error("{0}")]
    Api(ApiError),

    /// Request timed out before a response arrived.
    #[error("request timeout")]
    Timeout,

    /// Connection-level failure before any response was received.
    #[error("connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Structured error payload the service returns alongside non-success
/// statuses.
///
/// Decoding is best-effort: when the response body is not this shape, both
/// fields stay at their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorPayload {
    /// Service-assigned numeric error code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable error message.
    #[serde(default)]
    pub error: String,
}

/// A rejected remote call, with full diagnostic context.
///
/// Carries everything a caller needs to distinguish auth failures, not-found,
/// and validation failures: the status code, the response headers, the raw
/// body text verbatim, the best-effort decoded payload, and the request URL.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code of the rejection.
    pub status: u16,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
    /// Raw response body text, preserved verbatim.
    pub body: String,
    /// Best-effort decoded error payload.
    pub decoded: ErrorPayload,
    /// The URL the rejected request was sent to.
    pub url: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Request {} returned status {}, {}",
            self.url, self.status, self.body
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("invalid URL: {}", err)), err)
    }
}
