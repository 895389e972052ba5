//! Error types for the Activiti client.
//!
//! # Design
//! Two failure kinds reach the caller. A `Transport` error means the exchange
//! never produced an HTTP response (connection refused, timeout, DNS); it is
//! passed through from the transport without interpretation. An `Api` error
//! means the server answered with a non-2xx status; the raw status code and
//! body text are kept verbatim and never mapped onto per-resource variants.

use thiserror::Error;

/// Result alias used by every service operation.
pub type Result<T> = std::result::Result<T, ActivitiError>;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Network-level failure reported by a [`Transport`](crate::Transport).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by service operations.
#[derive(Debug, Error)]
pub enum ActivitiError {
    /// The transport failed before an HTTP response was received.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A successful response body could not be decoded into the expected model.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A request argument cannot be turned into a valid request; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Client configuration could not be assembled.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ActivitiError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ActivitiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
