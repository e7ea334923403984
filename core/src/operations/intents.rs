//! Intents: named user goals with example utterances.

use serde::{Deserialize, Serialize};

use super::{EXPORT, EXPORT_PAGING};
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::CreateExample;

static LIST_INTENTS: Operation = Operation {
    name: "list_intents",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/intents",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: EXPORT_PAGING,
    body: None,
};

static CREATE_INTENT: Operation = Operation {
    name: "create_intent",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/intents",
    required: &["workspace_id", "intent"],
    path: &["workspace_id"],
    query: &[],
    body: Some(&[
        ("intent", "intent"),
        ("description", "description"),
        ("examples", "examples"),
    ]),
};

static GET_INTENT: Operation = Operation {
    name: "get_intent",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}",
    required: &["workspace_id", "intent"],
    path: &["workspace_id", "intent"],
    query: EXPORT,
    body: None,
};

static UPDATE_INTENT: Operation = Operation {
    name: "update_intent",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}",
    required: &["workspace_id", "intent"],
    path: &["workspace_id", "intent"],
    query: &[],
    body: Some(&[
        ("intent", "new_intent"),
        ("description", "new_description"),
        ("examples", "new_examples"),
    ]),
};

static DELETE_INTENT: Operation = Operation {
    name: "delete_intent",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/intents/{intent}",
    required: &["workspace_id", "intent"],
    path: &["workspace_id", "intent"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListIntentsParams {
    pub workspace_id: Option<String>,
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateIntentParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
    pub description: Option<String>,
    pub examples: Option<Vec<CreateExample>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetIntentParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateIntentParams {
    pub workspace_id: Option<String>,
    /// Current name of the intent.
    pub intent: Option<String>,
    pub new_intent: Option<String>,
    pub new_description: Option<String>,
    pub new_examples: Option<Vec<CreateExample>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteIntentParams {
    pub workspace_id: Option<String>,
    pub intent: Option<String>,
}

impl ConversationClient {
    pub fn list_intents(&self, params: &ListIntentsParams) -> PendingCall {
        self.call(&LIST_INTENTS, params)
    }

    pub fn create_intent(&self, params: &CreateIntentParams) -> PendingCall {
        self.call(&CREATE_INTENT, params)
    }

    pub fn get_intent(&self, params: &GetIntentParams) -> PendingCall {
        self.call(&GET_INTENT, params)
    }

    pub fn update_intent(&self, params: &UpdateIntentParams) -> PendingCall {
        self.call(&UPDATE_INTENT, params)
    }

    pub fn delete_intent(&self, params: &DeleteIntentParams) -> PendingCall {
        self.call(&DELETE_INTENT, params)
    }
}
