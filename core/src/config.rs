//! Service-wide configuration shared by every call a client makes.
//!
//! # Design
//! `ServiceConfig` is validated once, at construction, and is read-only
//! afterwards. A missing or malformed version date is a `Configuration`
//! error: without it no request can be built, so the client is never
//! handed out.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use time::macros::format_description;
use time::Date;
use url::Url;

use crate::error::ConversationError;
use crate::options::{Credentials, RequestOptions};

/// Public endpoint of the hosted service.
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/conversation/api";

pub const ENV_URL: &str = "CONVERSATION_URL";
pub const ENV_VERSION_DATE: &str = "CONVERSATION_VERSION_DATE";
pub const ENV_API_KEY: &str = "CONVERSATION_API_KEY";

/// API revision selector, sent as `version=YYYY-MM-DD` on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDate(Cow<'static, str>);

impl VersionDate {
    pub const V2017_05_26: VersionDate = VersionDate(Cow::Borrowed("2017-05-26"));
    pub const V2017_04_21: VersionDate = VersionDate(Cow::Borrowed("2017-04-21"));
    pub const V2017_02_03: VersionDate = VersionDate(Cow::Borrowed("2017-02-03"));
    pub const V2016_09_20: VersionDate = VersionDate(Cow::Borrowed("2016-09-20"));
    pub const V2016_07_11: VersionDate = VersionDate(Cow::Borrowed("2016-07-11"));

    pub fn parse(raw: &str) -> Result<Self, ConversationError> {
        let format = format_description!("[year]-[month]-[day]");
        if raw.len() != 10 || Date::parse(raw, format).is_err() {
            return Err(ConversationError::Configuration(format!(
                "version date '{raw}' is not a YYYY-MM-DD date"
            )));
        }
        Ok(Self(Cow::Owned(raw.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VersionDate> for String {
    fn from(date: VersionDate) -> Self {
        date.0.into_owned()
    }
}

/// Immutable configuration owned by a `ConversationClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    version_date: VersionDate,
    credentials: Option<Credentials>,
    headers: BTreeMap<String, String>,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Read `CONVERSATION_URL`, `CONVERSATION_VERSION_DATE` and
    /// `CONVERSATION_API_KEY` from the process environment.
    pub fn from_env() -> Result<Self, ConversationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConversationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(url) = lookup(ENV_URL) {
            builder = builder.base_url(url);
        }
        if let Some(date) = lookup(ENV_VERSION_DATE) {
            builder = builder.version_date(date);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            builder = builder.credentials(Credentials::Bearer(key));
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version_date(&self) -> &VersionDate {
        &self.version_date
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The bottom option layer every call starts from.
    pub fn default_options(&self) -> RequestOptions {
        let mut options = RequestOptions::new()
            .base_url(self.base_url.clone())
            .query("version", self.version_date.as_str());
        options.headers = self.headers.clone();
        options.credentials = self.credentials.clone();
        options
    }
}

#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    base_url: Option<String>,
    version_date: Option<String>,
    credentials: Option<Credentials>,
    headers: BTreeMap<String, String>,
}

impl ServiceConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn version_date(mut self, version_date: impl Into<String>) -> Self {
        self.version_date = Some(version_date.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Header sent on every request unless a call overrides it.
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn build(self) -> Result<ServiceConfig, ConversationError> {
        let raw_date = self.version_date.ok_or_else(|| {
            ConversationError::Configuration(format!(
                "version date was not specified, use {}",
                VersionDate::V2017_05_26
            ))
        })?;
        let version_date = VersionDate::parse(&raw_date)?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            ConversationError::Configuration(format!("invalid base url '{base_url}': {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConversationError::Configuration(format!(
                "base url '{base_url}' must use http or https"
            )));
        }

        Ok(ServiceConfig {
            base_url,
            version_date,
            credentials: self.credentials,
            headers: self.headers,
        })
    }
}
