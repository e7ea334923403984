//! The runtime `message` call: send one user turn, get the service's reply.
//!
//! The response carries the `context` to pass back on the next turn; the
//! client keeps no conversation state of its own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::{MessageInput, RuntimeEntity, RuntimeIntent};

static MESSAGE: Operation = Operation {
    name: "message",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/message",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: &[],
    body: Some(&[
        ("input", "input"),
        ("alternate_intents", "alternate_intents"),
        ("context", "context"),
        ("entities", "entities"),
        ("intents", "intents"),
        ("output", "output"),
    ]),
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageParams {
    pub workspace_id: Option<String>,
    pub input: Option<MessageInput>,
    /// Return every matching intent, not only the top one.
    pub alternate_intents: Option<bool>,
    /// State returned by the previous turn.
    pub context: Option<Value>,
    /// Entities to use instead of the ones the service would extract.
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Intents to use instead of the ones the service would classify.
    pub intents: Option<Vec<RuntimeIntent>>,
    pub output: Option<Value>,
}

impl ConversationClient {
    pub fn message(&self, params: &MessageParams) -> PendingCall {
        self.call(&MESSAGE, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_support::{body, client, missing};
    use serde_json::json;

    #[test]
    fn message_posts_input_and_context() {
        let params = MessageParams {
            workspace_id: Some("ws1".to_string()),
            input: Some(MessageInput {
                text: "turn on the lights".to_string(),
            }),
            context: Some(json!({"conversation_id": "c1"})),
            alternate_intents: Some(false),
            ..Default::default()
        };
        let req = client().message(&params).resolve().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "http://localhost:3000/v1/workspaces/ws1/message?version=2017-05-26"
        );
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(
            body(&req),
            json!({
                "input": {"text": "turn on the lights"},
                "alternate_intents": false,
                "context": {"conversation_id": "c1"}
            })
        );
    }

    #[test]
    fn message_sends_runtime_overrides() {
        let params = MessageParams {
            workspace_id: Some("ws1".to_string()),
            intents: Some(vec![RuntimeIntent {
                intent: "lights_on".to_string(),
                confidence: 1.0,
            }]),
            entities: Some(vec![RuntimeEntity {
                entity: "room".to_string(),
                location: vec![0, 7],
                value: "kitchen".to_string(),
                confidence: None,
                metadata: None,
            }]),
            ..Default::default()
        };
        let req = client().message(&params).resolve().unwrap();
        assert_eq!(
            body(&req),
            json!({
                "entities": [{"entity": "room", "location": [0, 7], "value": "kitchen"}],
                "intents": [{"intent": "lights_on", "confidence": 1.0}]
            })
        );
    }

    #[test]
    fn message_without_workspace_is_rejected() {
        let params = MessageParams {
            input: Some(MessageInput {
                text: "hi".to_string(),
            }),
            ..Default::default()
        };
        let err = client().message(&params).resolve().unwrap_err();
        assert_eq!(missing(err), vec!["workspace_id"]);
    }
}
