//! Error types for the conversation client.
//!
//! # Design
//! One enum covers every way a call can end without a successful response.
//! `Configuration` is raised while building a client and never by an
//! operation. `Validation` and `Resolution` are produced locally before any
//! network activity. `Transport` and `Api` only come out of the dispatcher
//! and are delivered through the same channel a success would have used.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Errors returned by `ConversationClient` operations and construction.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The client could not be constructed (missing or malformed version
    /// date, unparsable base URL, bad environment).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One or more required parameters were not supplied. Lists all of them.
    #[error("missing required parameters: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// A URL template could not be resolved after validation passed.
    #[error("could not resolve request path: {0}")]
    Resolution(String),

    /// The request never produced an HTTP response.
    #[error("{kind} failure: {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ConversationError {
    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConversationError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The service returned 404: the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Classification of failures that happen below HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS failure, refused or reset connection.
    Connect,
    /// The transport gave up waiting.
    Timeout,
    /// Anything else the transport reports (TLS, protocol, I/O mid-body).
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Connect => write!(f, "connection"),
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Other => write!(f, "transport"),
        }
    }
}
