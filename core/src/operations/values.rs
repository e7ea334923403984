//! Entity values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EXPORT, EXPORT_PAGING};
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::ValueType;

static LIST_VALUES: Operation = Operation {
    name: "list_values",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values",
    required: &["workspace_id", "entity"],
    path: &["workspace_id", "entity"],
    query: EXPORT_PAGING,
    body: None,
};

static CREATE_VALUE: Operation = Operation {
    name: "create_value",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values",
    required: &["workspace_id", "entity", "value"],
    path: &["workspace_id", "entity"],
    query: &[],
    body: Some(&[
        ("value", "value"),
        ("metadata", "metadata"),
        ("synonyms", "synonyms"),
        ("patterns", "patterns"),
        ("type", "value_type"),
    ]),
};

static GET_VALUE: Operation = Operation {
    name: "get_value",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}",
    required: &["workspace_id", "entity", "value"],
    path: &["workspace_id", "entity", "value"],
    query: EXPORT,
    body: None,
};

static UPDATE_VALUE: Operation = Operation {
    name: "update_value",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}",
    required: &["workspace_id", "entity", "value"],
    path: &["workspace_id", "entity", "value"],
    query: &[],
    body: Some(&[
        ("value", "new_value"),
        ("metadata", "new_metadata"),
        ("type", "new_type"),
        ("synonyms", "new_synonyms"),
        ("patterns", "new_patterns"),
    ]),
};

static DELETE_VALUE: Operation = Operation {
    name: "delete_value",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}",
    required: &["workspace_id", "entity", "value"],
    path: &["workspace_id", "entity", "value"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListValuesParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateValueParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub metadata: Option<Value>,
    pub synonyms: Option<Vec<String>>,
    /// Regular expressions; only meaningful with `ValueType::Patterns`.
    pub patterns: Option<Vec<String>>,
    pub value_type: Option<ValueType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetValueParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateValueParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub new_value: Option<String>,
    pub new_metadata: Option<Value>,
    pub new_type: Option<ValueType>,
    pub new_synonyms: Option<Vec<String>>,
    pub new_patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteValueParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
}

impl ConversationClient {
    pub fn list_values(&self, params: &ListValuesParams) -> PendingCall {
        self.call(&LIST_VALUES, params)
    }

    pub fn create_value(&self, params: &CreateValueParams) -> PendingCall {
        self.call(&CREATE_VALUE, params)
    }

    pub fn get_value(&self, params: &GetValueParams) -> PendingCall {
        self.call(&GET_VALUE, params)
    }

    pub fn update_value(&self, params: &UpdateValueParams) -> PendingCall {
        self.call(&UPDATE_VALUE, params)
    }

    pub fn delete_value(&self, params: &DeleteValueParams) -> PendingCall {
        self.call(&DELETE_VALUE, params)
    }
}
