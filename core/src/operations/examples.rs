//! User-input examples attached to an intent.

use serde::{Deserialize, Serialize};

use super::PAGING;
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;

static LIST_EXAMPLES: Operation = Operation {
    name: "list_examples",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}/examples",
    required: &["workspace_id", "intent"],
    path: &["workspace_id", "intent"],
    query: PAGING,
    body: None,
};

static CREATE_EXAMPLE: Operation = Operation {
    name: "create_example",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}/examples",
    required: &["workspace_id", "intent", "text"],
    path: &["workspace_id", "intent"],
    query: &[],
    body: Some(&[("text", "text")]),
};

static GET_EXAMPLE: Operation = Operation {
    name: "get_example",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}",
    required: &["workspace_id", "intent", "text"],
    path: &["workspace_id", "intent", "text"],
    query: &[],
    body: None,
};

static UPDATE_EXAMPLE: Operation = Operation {
    name: "update_example",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}",
    required: &["workspace_id", "intent", "text"],
    path: &["workspace_id", "intent", "text"],
    query: &[],
    body: Some(&[("text", "new_text")]),
};

static DELETE_EXAMPLE: Operation = Operation {
    name: "delete_example",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}",
    required: &["workspace_id", "intent", "text"],
    path: &["workspace_id", "intent", "text"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExamplesParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

/// Identifies one example; used by create, get and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExampleParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
    /// Current text of the example.
    pub text: Option<String>,
    pub new_text: Option<String>,
}

impl ConversationClient {
    pub fn list_examples(&self, params: &ListExamplesParams) -> PendingCall {
        self.call(&LIST_EXAMPLES, params)
    }

    pub fn create_example(&self, params: &ExampleParams) -> PendingCall {
        self.call(&CREATE_EXAMPLE, params)
    }

    pub fn get_example(&self, params: &ExampleParams) -> PendingCall {
        self.call(&GET_EXAMPLE, params)
    }

    pub fn update_example(&self, params: &UpdateExampleParams) -> PendingCall {
        self.call(&UPDATE_EXAMPLE, params)
    }

    pub fn delete_example(&self, params: &ExampleParams) -> PendingCall {
        self.call(&DELETE_EXAMPLE, params)
    }
}
