//! Asynchronous client core for the conversation service.
//!
//! # Overview
//! Every remote operation is a thin method on [`ConversationClient`] that
//! hands a static operation table and typed parameters to one shared
//! request-construction engine: validate required names, resolve the URL
//! template, merge service, operation and per-call options, then dispatch
//! through a [`Transport`].
//!
//! # Design
//! - Validation happens when the method is called; a rejected call never
//!   reaches the transport.
//! - The transport is a trait so tests can record requests instead of
//!   sending them. [`UreqTransport`] is the default.
//! - Results come back either by awaiting the [`PendingCall`] or through
//!   [`PendingCall::on_complete`]; both build the same request.

pub mod client;
pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod operations;
pub mod options;
pub mod path;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::{ConversationClient, PendingCall};
pub use config::{ServiceConfig, ServiceConfigBuilder, VersionDate};
pub use dispatch::{ApiResponse, Transport, TransportFailure};
pub use error::{ConversationError, TransportErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResolvedRequest};
pub use options::{Credentials, RequestOptions};
pub use transport::UreqTransport;
pub use types::{
    CreateCounterexample, CreateDialogNode, CreateEntity, CreateExample, CreateIntent, CreateValue,
    DialogNodeAction, DialogNodeNextStep, EventName, MessageInput, NodeType, RuntimeEntity,
    RuntimeIntent, ValueType,
};

pub use operations::counterexamples::{
    CounterexampleParams, ListCounterexamplesParams, UpdateCounterexampleParams,
};
pub use operations::dialog_nodes::{
    CreateDialogNodeParams, DialogNodeParams, ListDialogNodesParams, UpdateDialogNodeParams,
};
pub use operations::entities::{
    CreateEntityParams, DeleteEntityParams, GetEntityParams, ListEntitiesParams,
    UpdateEntityParams,
};
pub use operations::examples::{ExampleParams, ListExamplesParams, UpdateExampleParams};
pub use operations::intents::{
    CreateIntentParams, DeleteIntentParams, GetIntentParams, ListIntentsParams, UpdateIntentParams,
};
pub use operations::logs::ListLogsParams;
pub use operations::message::MessageParams;
pub use operations::synonyms::{ListSynonymsParams, SynonymParams, UpdateSynonymParams};
pub use operations::values::{
    CreateValueParams, DeleteValueParams, GetValueParams, ListValuesParams, UpdateValueParams,
};
pub use operations::workspaces::{
    CreateWorkspaceParams, DeleteWorkspaceParams, GetWorkspaceParams, ListWorkspacesParams,
    UpdateWorkspaceParams,
};
