//! Required-parameter checks run before a request is built.

use serde_json::{Map, Value};

/// Names of required parameters that were not supplied, in the order they
/// were declared. Empty means the call may proceed.
pub type MissingParams = Vec<String>;

/// Report every name in `required` that is absent from `args` or set to
/// `null`.
///
/// Only absence counts: an empty string, `false` or `0` is a supplied value.
pub fn missing_params(args: &Map<String, Value>, required: &[&str]) -> MissingParams {
    required
        .iter()
        .filter(|name| matches!(args.get(**name), None | Some(Value::Null)))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn nothing_missing_when_all_supplied() {
        let bag = args(json!({"workspace_id": "ws1", "intent": "greet"}));
        assert!(missing_params(&bag, &["workspace_id", "intent"]).is_empty());
    }

    #[test]
    fn reports_all_missing_names_in_declared_order() {
        let bag = args(json!({"value": "x"}));
        let missing = missing_params(&bag, &["workspace_id", "entity", "value", "synonym"]);
        assert_eq!(missing, vec!["workspace_id", "entity", "synonym"]);
    }

    #[test]
    fn null_counts_as_missing() {
        let bag = args(json!({"workspace_id": null}));
        assert_eq!(missing_params(&bag, &["workspace_id"]), vec!["workspace_id"]);
    }

    #[test]
    fn falsy_values_are_present() {
        let bag = args(json!({"text": "", "include_count": false, "page_limit": 0}));
        assert!(missing_params(&bag, &["text", "include_count", "page_limit"]).is_empty());
    }

    #[test]
    fn no_requirements_never_rejects() {
        assert!(missing_params(&Map::new(), &[]).is_empty());
    }
}
