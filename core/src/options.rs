//! Request options and how layers of them are combined.
//!
//! # Design
//! A call's effective options come from three layers merged in order:
//! service defaults (base URL, `version` query, default headers,
//! credentials), the operation's own headers (`accept`, `content-type`) and
//! whatever the caller overrides for that one call. `merge` is defined over
//! the known fields only: the two maps merge key by key, the scalars are
//! replaced wholesale. Nothing is mutated; every merge returns a new value.

use std::collections::BTreeMap;
use std::fmt;

/// Credential material attached to every request as a header.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `authorization: Bearer <token>`.
    Bearer(String),
    /// An arbitrary header, e.g. an API-key gateway header.
    Header { name: String, value: String },
}

impl Credentials {
    /// Header name (lowercase) and value this credential renders to.
    pub fn header(&self) -> (String, String) {
        match self {
            Credentials::Bearer(token) => ("authorization".to_string(), format!("Bearer {token}")),
            Credentials::Header { name, value } => (name.to_ascii_lowercase(), value.clone()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Credentials::Header { name, .. } => f
                .debug_struct("Header")
                .field("name", name)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}

/// One layer of request options.
///
/// Header names are stored lowercase, so use [`RequestOptions::header`]
/// rather than inserting into `headers` directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub base_url: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    pub credentials: Option<Credentials>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Final header list: the merged headers plus the credential header,
    /// unless a layer already set that header explicitly.
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if let Some(credentials) = &self.credentials {
            let (name, value) = credentials.header();
            headers.entry(name).or_insert(value);
        }
        headers.into_iter().collect()
    }
}

/// Deep, key-wise union of two option layers. `overrides` wins on conflict.
pub fn merge(defaults: &RequestOptions, overrides: &RequestOptions) -> RequestOptions {
    RequestOptions {
        base_url: overrides
            .base_url
            .clone()
            .or_else(|| defaults.base_url.clone()),
        headers: merge_map(&defaults.headers, &overrides.headers),
        query: merge_map(&defaults.query, &overrides.query),
        credentials: overrides
            .credentials
            .clone()
            .or_else(|| defaults.credentials.clone()),
    }
}

fn merge_map(
    defaults: &BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
