//! Declarative operation tables and the per-call descriptor built from them.
//!
//! # Design
//! Every remote operation is a static [`Operation`]: method, URL template,
//! required names, and which argument fields feed the path, the query
//! string and the body. A call serializes its typed parameters into an
//! argument map and [`OperationDescriptor::from_args`] does the rest by
//! field selection. Unset fields never reach the wire.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::ConversationError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{merge, RequestOptions};
use crate::path::resolve_path;
use crate::validate::missing_params;

const JSON: &str = "application/json";

/// Static description of one remote operation.
#[derive(Debug)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    pub template: &'static str,
    pub required: &'static [&'static str],
    pub path: &'static [&'static str],
    pub query: &'static [&'static str],
    /// `(wire name, argument name)` pairs. `None` for operations that send
    /// no body at all.
    pub body: Option<&'static [(&'static str, &'static str)]>,
}

/// One call's worth of request data, before path resolution and option
/// merging.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub template: &'static str,
    pub required: &'static [&'static str],
    pub path_params: BTreeMap<String, String>,
    /// Set query parameters in declaration order.
    pub query: Vec<(String, String)>,
    pub body: Option<Map<String, Value>>,
}

impl OperationDescriptor {
    /// Validate `args` against `operation.required` and select the path,
    /// query and body fields.
    pub fn from_args(
        operation: &'static Operation,
        args: &Map<String, Value>,
    ) -> Result<Self, ConversationError> {
        let missing = missing_params(args, operation.required);
        if !missing.is_empty() {
            return Err(ConversationError::Validation { missing });
        }

        let path_params = operation
            .path
            .iter()
            .filter_map(|name| scalar_text(args.get(*name)?).map(|text| (name.to_string(), text)))
            .collect();

        let query = operation
            .query
            .iter()
            .filter_map(|name| scalar_text(args.get(*name)?).map(|text| (name.to_string(), text)))
            .collect();

        let body = operation.body.map(|fields| {
            fields
                .iter()
                .filter_map(|(wire, param)| match args.get(*param) {
                    None | Some(Value::Null) => None,
                    Some(value) => Some((wire.to_string(), value.clone())),
                })
                .collect::<Map<String, Value>>()
        });

        Ok(Self {
            operation: operation.name,
            method: operation.method,
            template: operation.template,
            required: operation.required,
            path_params,
            query,
            body,
        })
    }

    /// Headers the operation itself contributes.
    pub fn operation_options(&self) -> RequestOptions {
        let options = RequestOptions::new().header("accept", JSON);
        if self.body.is_some() {
            options.header("content-type", JSON)
        } else {
            options
        }
    }

    /// Resolve the URL template and merge `defaults` ← operation headers ←
    /// `overrides` into a request ready for the transport.
    pub fn resolve(
        &self,
        defaults: &RequestOptions,
        overrides: &RequestOptions,
    ) -> Result<HttpRequest, ConversationError> {
        let path = resolve_path(self.template, &self.path_params)?;
        let options = merge(&merge(defaults, &self.operation_options()), overrides);

        let base_url = options.base_url.as_deref().ok_or_else(|| {
            ConversationError::Resolution(format!("no base url for '{}'", self.operation))
        })?;

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.query {
            query.append_pair(name, value);
        }
        for (name, value) in &options.query {
            if !self.query.iter().any(|(own, _)| own == name) {
                query.append_pair(name, value);
            }
        }
        let query = query.finish();

        let url = if query.is_empty() {
            format!("{base_url}{path}")
        } else {
            format!("{base_url}{path}?{query}")
        };

        let body = match &self.body {
            Some(fields) => Some(
                serde_json::to_string(fields)
                    .map_err(|e| ConversationError::Serialization(e.to_string()))?,
            ),
            None => None,
        };

        Ok(HttpRequest {
            method: self.method,
            url,
            headers: options.effective_headers(),
            body,
        })
    }
}

/// Text form of a path or query value. `null` and absent values are unset.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}
