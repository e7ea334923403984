//! Blocking `ureq` transport driven from async code.
//!
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and are classified by the dispatcher. Inside a
//! tokio runtime each request runs on its blocking pool; any other executor
//! gets a dedicated thread that reports back over a oneshot channel.

use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use tokio::runtime::Handle;
use ureq::typestate::WithBody;
use ureq::RequestBuilder;

use crate::dispatch::{Transport, TransportFailure};
use crate::error::TransportErrorKind;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(None)
    }

    /// `timeout` bounds the whole round-trip; `None` waits indefinitely.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let agent = self.agent.clone();
        if let Ok(handle) = Handle::try_current() {
            return handle
                .spawn_blocking(move || execute(&agent, request))
                .await
                .map_err(|e| TransportFailure::new(TransportErrorKind::Other, e.to_string()))?;
        }

        let (tx, rx) = oneshot::channel();
        std::thread::Builder::new()
            .name("ureq-transport".to_string())
            .spawn(move || {
                let _ = tx.send(execute(&agent, request));
            })
            .map_err(|e| TransportFailure::new(TransportErrorKind::Other, e.to_string()))?;
        rx.await.map_err(|_| {
            TransportFailure::new(TransportErrorKind::Other, "transport thread exited without a reply")
        })?
    }
}

fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
    let HttpRequest {
        method,
        url,
        headers,
        body,
    } = request;

    let result = match method {
        HttpMethod::Get => with_headers(agent.get(&url), &headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&url), &headers).call(),
        HttpMethod::Post => send_body(with_headers(agent.post(&url), &headers), body),
    };
    let mut response = result.map_err(classify)?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().map_err(classify)?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: RequestBuilder<WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

fn classify(error: ureq::Error) -> TransportFailure {
    let kind = match &error {
        ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
        ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => TransportErrorKind::Connect,
        ureq::Error::Io(io) => match io.kind() {
            ErrorKind::TimedOut => TransportErrorKind::Timeout,
            ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected => TransportErrorKind::Connect,
            _ => TransportErrorKind::Other,
        },
        _ => TransportErrorKind::Other,
    };
    TransportFailure::new(kind, error.to_string())
}
