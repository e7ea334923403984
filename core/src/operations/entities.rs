//! Entities: named slot types whose values the service extracts from input.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EXPORT, EXPORT_PAGING};
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::CreateValue;

static LIST_ENTITIES: Operation = Operation {
    name: "list_entities",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: EXPORT_PAGING,
    body: None,
};

static CREATE_ENTITY: Operation = Operation {
    name: "create_entity",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities",
    required: &["workspace_id", "entity"],
    path: &["workspace_id"],
    query: &[],
    body: Some(&[
        ("entity", "entity"),
        ("description", "description"),
        ("metadata", "metadata"),
        ("values", "values"),
        ("fuzzy_match", "fuzzy_match"),
    ]),
};

static GET_ENTITY: Operation = Operation {
    name: "get_entity",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}",
    required: &["workspace_id", "entity"],
    path: &["workspace_id", "entity"],
    query: EXPORT,
    body: None,
};

static UPDATE_ENTITY: Operation = Operation {
    name: "update_entity",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}",
    required: &["workspace_id", "entity"],
    path: &["workspace_id", "entity"],
    query: &[],
    body: Some(&[
        ("entity", "new_entity"),
        ("description", "new_description"),
        ("metadata", "new_metadata"),
        ("fuzzy_match", "new_fuzzy_match"),
        ("values", "new_values"),
    ]),
};

static DELETE_ENTITY: Operation = Operation {
    name: "delete_entity",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}",
    required: &["workspace_id", "entity"],
    path: &["workspace_id", "entity"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEntitiesParams {
    pub workspace_id: Option<String>,
    pub export: Option<bool>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEntityParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Value>,
    pub values: Option<Vec<CreateValue>>,
    pub fuzzy_match: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetEntityParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntityParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub new_entity: Option<String>,
    pub new_description: Option<String>,
    pub new_metadata: Option<Value>,
    pub new_fuzzy_match: Option<bool>,
    pub new_values: Option<Vec<CreateValue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteEntityParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
}

impl ConversationClient {
    pub fn list_entities(&self, params: &ListEntitiesParams) -> PendingCall {
        self.call(&LIST_ENTITIES, params)
    }

    pub fn create_entity(&self, params: &CreateEntityParams) -> PendingCall {
        self.call(&CREATE_ENTITY, params)
    }

    pub fn get_entity(&self, params: &GetEntityParams) -> PendingCall {
        self.call(&GET_ENTITY, params)
    }

    pub fn update_entity(&self, params: &UpdateEntityParams) -> PendingCall {
        self.call(&UPDATE_ENTITY, params)
    }

    pub fn delete_entity(&self, params: &DeleteEntityParams) -> PendingCall {
        self.call(&DELETE_ENTITY, params)
    }
}
