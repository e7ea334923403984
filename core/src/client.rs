//! The client handle and the per-call `PendingCall`.
//!
//! # Design
//! `ConversationClient` owns an `Arc<ServiceConfig>` and an
//! `Arc<dyn Transport>`; clones share both and nothing mutates them after
//! construction. Every operation method runs the same pipeline:
//! serialize the typed parameters, validate, select fields (all of that
//! happens immediately), then resolve the path, merge options and dispatch
//! when the returned [`PendingCall`] is consumed.
//!
//! A `PendingCall` is consumed in one of two equivalent ways. Awaiting it
//! (it is `IntoFuture`) yields the parsed body. Passing a callback to
//! [`PendingCall::on_complete`] delivers the full `Result<ApiResponse, _>`
//! instead. Both go through [`PendingCall::send`], so the request that
//! reaches the network is the same. A rejected call never builds a request:
//! the callback runs before `on_complete` returns, and the future resolves
//! on first poll.

use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::descriptor::{Operation, OperationDescriptor};
use crate::dispatch::{dispatch, ApiResponse, Transport};
use crate::error::ConversationError;
use crate::http::HttpRequest;
use crate::options::RequestOptions;
use crate::transport::UreqTransport;

/// Client for the conversation service API.
#[derive(Clone)]
pub struct ConversationClient {
    config: Arc<ServiceConfig>,
    transport: Arc<dyn Transport>,
}

impl ConversationClient {
    /// Client backed by the default `ureq` transport.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(config: ServiceConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Build the configuration from `CONVERSATION_*` environment variables.
    pub fn from_env() -> Result<Self, ConversationError> {
        ServiceConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validate `params` against `operation` and return the pending call.
    pub(crate) fn call<P: Serialize>(&self, operation: &'static Operation, params: &P) -> PendingCall {
        let descriptor = arguments(params)
            .and_then(|args| OperationDescriptor::from_args(operation, &args));
        if let Err(ConversationError::Validation { missing }) = &descriptor {
            debug!(operation = operation.name, ?missing, "call rejected");
        }
        PendingCall {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
            descriptor,
            overrides: RequestOptions::default(),
        }
    }
}

impl fmt::Debug for ConversationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn arguments<P: Serialize>(params: &P) -> Result<serde_json::Map<String, Value>, ConversationError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(args)) => Ok(args),
        Ok(Value::Null) => Ok(serde_json::Map::new()),
        Ok(other) => Err(ConversationError::Serialization(format!(
            "operation parameters must serialize to an object, got {other}"
        ))),
        Err(e) => Err(ConversationError::Serialization(e.to_string())),
    }
}

/// A validated (or rejected) call that has not been dispatched yet.
#[must_use = "a call does nothing until it is awaited, sent or given a callback"]
pub struct PendingCall {
    config: Arc<ServiceConfig>,
    transport: Arc<dyn Transport>,
    descriptor: Result<OperationDescriptor, ConversationError>,
    overrides: RequestOptions,
}

impl PendingCall {
    /// Per-call options merged over the service and operation defaults.
    pub fn with_options(mut self, overrides: RequestOptions) -> Self {
        self.overrides = overrides;
        self
    }

    /// The descriptor built from the call's parameters, or the validation
    /// error that rejected them.
    pub fn descriptor(&self) -> Result<&OperationDescriptor, &ConversationError> {
        self.descriptor.as_ref()
    }

    /// Resolve the path and merge options without dispatching.
    pub fn resolve(self) -> Result<HttpRequest, ConversationError> {
        let descriptor = self.descriptor?;
        descriptor.resolve(&self.config.default_options(), &self.overrides)
    }

    /// Dispatch and deliver the full response.
    pub fn send(self) -> BoxFuture<'static, Result<ApiResponse, ConversationError>> {
        let transport = Arc::clone(&self.transport);
        match self.resolve() {
            Ok(request) => async move { dispatch(transport.as_ref(), request).await }.boxed(),
            Err(err) => future::ready(Err(err)).boxed(),
        }
    }

    /// Callback delivery.
    ///
    /// A rejected call invokes `callback` before this method returns, and the
    /// returned future is already complete. An accepted call sends nothing
    /// until the returned future is polled: `callback` runs when it finishes,
    /// and dropping the future unpolled drops `callback` without running it.
    pub fn on_complete<F>(self, callback: F) -> BoxFuture<'static, ()>
    where
        F: FnOnce(Result<ApiResponse, ConversationError>) + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        match self.resolve() {
            Ok(request) => async move {
                callback(dispatch(transport.as_ref(), request).await);
            }
            .boxed(),
            Err(err) => {
                callback(Err(err));
                future::ready(()).boxed()
            }
        }
    }
}

impl IntoFuture for PendingCall {
    type Output = Result<Value, ConversationError>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.send().map(|result| result.map(|response| response.body)).boxed()
    }
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall")
            .field("descriptor", &self.descriptor)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}
