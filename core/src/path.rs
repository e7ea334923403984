//! URL template resolution.
//!
//! Templates use `{name}` placeholders, e.g.
//! `/v1/workspaces/{workspace_id}/intents/{intent}`. Every substituted value
//! is percent-encoded as a single path segment so that user text such as an
//! example utterance (`"what?/why"`) can never change which route is hit.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ConversationError;

/// Everything outside the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Substitute every `{name}` in `template` with the encoded `params[name]`.
///
/// A placeholder with no value, or an unterminated `{`, is a
/// `Resolution` error.
pub fn resolve_path(
    template: &str,
    params: &BTreeMap<String, String>,
) -> Result<String, ConversationError> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        resolved.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ConversationError::Resolution(format!("unterminated placeholder in '{template}'"))
        })?;
        let name = &after[..close];
        let value = params.get(name).ok_or_else(|| {
            ConversationError::Resolution(format!("no value for placeholder '{{{name}}}' in '{template}'"))
        })?;
        push_segment(&mut resolved, value);
        rest = &after[close + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

fn push_segment(out: &mut String, value: &str) {
    // Dot segments are normalised away by URL parsers.
    if value == "." || value == ".." {
        for _ in value.chars() {
            out.push_str("%2E");
        }
        return;
    }
    out.extend(utf8_percent_encode(value, PATH_SEGMENT));
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_every_placeholder() {
        let path = resolve_path(
            "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}",
            &params(&[("workspace_id", "ws1"), ("entity", "city"), ("value", "Paris")]),
        )
        .unwrap();
        assert_eq!(path, "/v1/workspaces/ws1/entities/city/values/Paris");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(resolve_path("/v1/workspaces", &BTreeMap::new()).unwrap(), "/v1/workspaces");
    }

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        let text = "what?/ever #1";
        let path = resolve_path(
            "/v1/workspaces/{workspace_id}/counterexamples/{text}",
            &params(&[("workspace_id", "ws1"), ("text", text)]),
        )
        .unwrap();
        assert_eq!(path, "/v1/workspaces/ws1/counterexamples/what%3F%2Fever%20%231");

        let segments: Vec<&str> = path.split('/').collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(percent_decode_str(segments[4]).decode_utf8().unwrap(), text);
    }

    #[test]
    fn non_ascii_values_round_trip() {
        let path = resolve_path("/v/{value}", &params(&[("value", "café")])).unwrap();
        assert_eq!(path, "/v/caf%C3%A9");
        let segment = path.rsplit('/').next().unwrap();
        assert_eq!(percent_decode_str(segment).decode_utf8().unwrap(), "café");
    }

    #[test]
    fn dot_segments_are_escaped() {
        let path = resolve_path("/v/{value}", &params(&[("value", "..")])).unwrap();
        assert_eq!(path, "/v/%2E%2E");
    }

    #[test]
    fn missing_placeholder_value_is_a_resolution_error() {
        let err = resolve_path("/v1/workspaces/{workspace_id}", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, ConversationError::Resolution(_)));
    }

    #[test]
    fn unterminated_placeholder_is_a_resolution_error() {
        let err = resolve_path("/v1/workspaces/{workspace_id", &params(&[("workspace_id", "x")]))
            .unwrap_err();
        assert!(matches!(err, ConversationError::Resolution(_)));
    }
}
