//! Synonyms of an entity value.

use serde::{Deserialize, Serialize};

use super::PAGING;
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;

static LIST_SYNONYMS: Operation = Operation {
    name: "list_synonyms",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms",
    required: &["workspace_id", "entity", "value"],
    path: &["workspace_id", "entity", "value"],
    query: PAGING,
    body: None,
};

static CREATE_SYNONYM: Operation = Operation {
    name: "create_synonym",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms",
    required: &["workspace_id", "entity", "value", "synonym"],
    path: &["workspace_id", "entity", "value"],
    query: &[],
    body: Some(&[("synonym", "synonym")]),
};

static GET_SYNONYM: Operation = Operation {
    name: "get_synonym",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}",
    required: &["workspace_id", "entity", "value", "synonym"],
    path: &["workspace_id", "entity", "value", "synonym"],
    query: &[],
    body: None,
};

static UPDATE_SYNONYM: Operation = Operation {
    name: "update_synonym",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}",
    required: &["workspace_id", "entity", "value", "synonym"],
    path: &["workspace_id", "entity", "value", "synonym"],
    query: &[],
    body: Some(&[("synonym", "new_synonym")]),
};

static DELETE_SYNONYM: Operation = Operation {
    name: "delete_synonym",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}",
    required: &["workspace_id", "entity", "value", "synonym"],
    path: &["workspace_id", "entity", "value", "synonym"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSynonymsParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

/// Identifies one synonym; used by create, get and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub synonym: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSynonymParams {
    pub workspace_id: Option<String>,
    pub entity: Option<String>,
    pub value: Option<String>,
    pub synonym: Option<String>,
    pub new_synonym: Option<String>,
}

impl ConversationClient {
    pub fn list_synonyms(&self, params: &ListSynonymsParams) -> PendingCall {
        self.call(&LIST_SYNONYMS, params)
    }

    pub fn create_synonym(&self, params: &SynonymParams) -> PendingCall {
        self.call(&CREATE_SYNONYM, params)
    }

    pub fn get_synonym(&self, params: &SynonymParams) -> PendingCall {
        self.call(&GET_SYNONYM, params)
    }

    pub fn update_synonym(&self, params: &UpdateSynonymParams) -> PendingCall {
        self.call(&UPDATE_SYNONYM, params)
    }

    pub fn delete_synonym(&self, params: &SynonymParams) -> PendingCall {
        self.call(&DELETE_SYNONYM, params)
    }
}
