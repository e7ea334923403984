//! Workspaces: the top-level container of intents, entities and dialog.
//!
//! `list_workspaces` and `create_workspace` take no required parameters,
//! matching the service contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{EXPORT, PAGING};
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::{CreateCounterexample, CreateDialogNode, CreateEntity, CreateIntent};

const WORKSPACE_BODY: &[(&str, &str)] = &[
    ("name", "name"),
    ("description", "description"),
    ("language", "language"),
    ("intents", "intents"),
    ("entities", "entities"),
    ("dialog_nodes", "dialog_nodes"),
    ("counterexamples", "counterexamples"),
    ("metadata", "metadata"),
    ("learning_opt_out", "learning_opt_out"),
];

static LIST_WORKSPACES: Operation = Operation {
    name: "list_workspaces",
    method: HttpMethod::Get,
    template: "/v1/workspaces",
    required: &[],
    path: &[],
    query: PAGING,
    body: None,
};

static CREATE_WORKSPACE: Operation = Operation {
    name: "create_workspace",
    method: HttpMethod::Post,
    template: "/v1/workspaces",
    required: &[],
    path: &[],
    query: &[],
    body: Some(WORKSPACE_BODY),
};

static GET_WORKSPACE: Operation = Operation {
    name: "get_workspace",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: EXPORT,
    body: None,
};

static UPDATE_WORKSPACE: Operation = Operation {
    name: "update_workspace",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: &[],
    body: Some(WORKSPACE_BODY),
};

static DELETE_WORKSPACE: Operation = Operation {
    name: "delete_workspace",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWorkspacesParams {
    /// Records per page; the service defaults to 100.
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    /// Property to sort by, prefixed with `-` for descending order.
    pub sort: Option<String>,
    /// Continuation token from the previous page.
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkspaceParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub intents: Option<Vec<CreateIntent>>,
    pub entities: Option<Vec<CreateEntity>>,
    pub dialog_nodes: Option<Vec<CreateDialogNode>>,
    pub counterexamples: Option<Vec<CreateCounterexample>>,
    pub metadata: Option<Value>,
    /// `true` keeps the workspace's training data out of general service
    /// improvements.
    pub learning_opt_out: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetWorkspaceParams {
    pub workspace_id: Option<String>,
    /// Include all sub-elements instead of just the workspace itself.
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkspaceParams {
    pub workspace_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub intents: Option<Vec<CreateIntent>>,
    pub entities: Option<Vec<CreateEntity>>,
    pub dialog_nodes: Option<Vec<CreateDialogNode>>,
    pub counterexamples: Option<Vec<CreateCounterexample>>,
    pub metadata: Option<Value>,
    pub learning_opt_out: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteWorkspaceParams {
    pub workspace_id: Option<String>,
}

impl ConversationClient {
    pub fn list_workspaces(&self, params: &ListWorkspacesParams) -> PendingCall {
        self.call(&LIST_WORKSPACES, params)
    }

    pub fn create_workspace(&self, params: &CreateWorkspaceParams) -> PendingCall {
        self.call(&CREATE_WORKSPACE, params)
    }

    pub fn get_workspace(&self, params: &GetWorkspaceParams) -> PendingCall {
        self.call(&GET_WORKSPACE, params)
    }

    pub fn update_workspace(&self, params: &UpdateWorkspaceParams) -> PendingCall {
        self.call(&UPDATE_WORKSPACE, params)
    }

    pub fn delete_workspace(&self, params: &DeleteWorkspaceParams) -> PendingCall {
        self.call(&DELETE_WORKSPACE, params)
    }
}
