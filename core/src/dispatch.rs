//! Turning a resolved request into exactly one network call.
//!
//! # Design
//! The network lives behind the [`Transport`] trait so the engine can be
//! driven by `UreqTransport` in production and by a recording stub in
//! tests. [`dispatch`] never retries. A transport failure or a non-2xx status
//! becomes a `ConversationError` that the caller receives through the same
//! channel as a success.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConversationError, TransportErrorKind};
use crate::http::{HttpRequest, HttpResponse};

/// A failure below HTTP, reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportFailure {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<TransportFailure> for ConversationError {
    fn from(failure: TransportFailure) -> Self {
        ConversationError::Transport {
            kind: failure.kind,
            message: failure.message,
        }
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok` data and must not
/// retry on their own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// A successful call: status, parsed JSON body and the raw response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
    pub raw: HttpResponse,
}

impl ApiResponse {
    /// Deserialize the body into a caller-chosen model.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ConversationError> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| ConversationError::Deserialization(e.to_string()))
    }
}

/// Send `request` through `transport` and classify the outcome.
pub async fn dispatch(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<ApiResponse, ConversationError> {
    let method = request.method;
    let url = request.url.clone();
    debug!(%method, %url, "dispatching request");

    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(failure) => {
            warn!(%method, %url, kind = %failure.kind, error = %failure.message, "transport failure");
            return Err(failure.into());
        }
    };

    debug!(%method, %url, status = response.status, "response received");
    let result = parse_response(response);
    if let Err(ConversationError::Api { status, message, .. }) = &result {
        warn!(%method, %url, status, %message, "service returned an error");
    }
    result
}

/// Map a raw response to an `ApiResponse` or an `Api`/`Deserialization`
/// error.
pub fn parse_response(response: HttpResponse) -> Result<ApiResponse, ConversationError> {
    if !response.is_success() {
        let body = serde_json::from_str::<Value>(&response.body).ok();
        let message = error_message(response.status, body.as_ref(), &response.body);
        return Err(ConversationError::Api {
            status: response.status,
            message,
            body,
        });
    }

    let body = if response.body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&response.body)
            .map_err(|e| ConversationError::Deserialization(e.to_string()))?
    };

    Ok(ApiResponse {
        status: response.status,
        body,
        raw: response,
    })
}

fn error_message(status: u16, body: Option<&Value>, raw: &str) -> String {
    let from_body = body.and_then(|body| {
        ["error", "message", "description"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
    });
    if let Some(message) = from_body {
        return message.to_string();
    }
    let raw = raw.trim();
    if !raw.is_empty() && body.is_none() {
        return raw.to_string();
    }
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("unexpected status")
        .to_string()
}
