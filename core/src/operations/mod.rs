//! One method per remote operation, grouped by resource.
//!
//! Parameter structs are plain data: every field is an `Option` so that a
//! forgotten required field is reported by validation rather than being
//! impossible to express. Unset optional fields never reach the wire.

pub mod counterexamples;
pub mod dialog_nodes;
pub mod entities;
pub mod examples;
pub mod intents;
pub mod logs;
pub mod message;
pub mod synonyms;
pub mod values;
pub mod workspaces;

/// Query names shared by every paginated list operation.
pub(crate) const PAGING: &[&str] = &["page_limit", "include_count", "sort", "cursor"];

/// `export` plus paging, for lists whose elements have sub-elements.
pub(crate) const EXPORT_PAGING: &[&str] = &["export", "page_limit", "include_count", "sort", "cursor"];

pub(crate) const EXPORT: &[&str] = &["export"];
