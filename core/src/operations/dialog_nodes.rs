//! Dialog nodes: the conversation flow graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::PAGING;
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;
use crate::types::{DialogNodeAction, DialogNodeNextStep, EventName, NodeType};

static LIST_DIALOG_NODES: Operation = Operation {
    name: "list_dialog_nodes",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/dialog_nodes",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: PAGING,
    body: None,
};

static CREATE_DIALOG_NODE: Operation = Operation {
    name: "create_dialog_node",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/dialog_nodes",
    required: &["workspace_id", "dialog_node"],
    path: &["workspace_id"],
    query: &[],
    body: Some(&[
        ("dialog_node", "dialog_node"),
        ("description", "description"),
        ("conditions", "conditions"),
        ("parent", "parent"),
        ("previous_sibling", "previous_sibling"),
        ("output", "output"),
        ("context", "context"),
        ("metadata", "metadata"),
        ("next_step", "next_step"),
        ("actions", "actions"),
        ("title", "title"),
        ("type", "node_type"),
        ("event_name", "event_name"),
        ("variable", "variable"),
    ]),
};

static GET_DIALOG_NODE: Operation = Operation {
    name: "get_dialog_node",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
    required: &["workspace_id", "dialog_node"],
    path: &["workspace_id", "dialog_node"],
    query: &[],
    body: None,
};

static UPDATE_DIALOG_NODE: Operation = Operation {
    name: "update_dialog_node",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
    required: &["workspace_id", "dialog_node", "new_dialog_node"],
    path: &["workspace_id", "dialog_node"],
    query: &[],
    body: Some(&[
        ("dialog_node", "new_dialog_node"),
        ("description", "new_description"),
        ("conditions", "new_conditions"),
        ("parent", "new_parent"),
        ("previous_sibling", "new_previous_sibling"),
        ("output", "new_output"),
        ("context", "new_context"),
        ("metadata", "new_metadata"),
        ("next_step", "new_next_step"),
        ("title", "new_title"),
        ("type", "new_type"),
        ("event_name", "new_event_name"),
        ("variable", "new_variable"),
        ("actions", "new_actions"),
    ]),
};

static DELETE_DIALOG_NODE: Operation = Operation {
    name: "delete_dialog_node",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}",
    required: &["workspace_id", "dialog_node"],
    path: &["workspace_id", "dialog_node"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDialogNodesParams {
    pub workspace_id: Option<String>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDialogNodeParams {
    pub workspace_id: Option<String>,
    pub dialog_node: Option<String>,
    pub description: Option<String>,
    /// Condition expression that triggers the node, e.g. `#greet`.
    pub conditions: Option<String>,
    pub parent: Option<String>,
    pub previous_sibling: Option<String>,
    pub output: Option<Value>,
    pub context: Option<Value>,
    pub metadata: Option<Value>,
    pub next_step: Option<DialogNodeNextStep>,
    pub actions: Option<Vec<DialogNodeAction>>,
    pub title: Option<String>,
    pub node_type: Option<NodeType>,
    /// Only meaningful for `NodeType::EventHandler`.
    pub event_name: Option<EventName>,
    /// Context location where a slot stores its value.
    pub variable: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogNodeParams {
    pub workspace_id: Option<String>,
    pub dialog_node: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDialogNodeParams {
    pub workspace_id: Option<String>,
    /// Current ID of the node.
    pub dialog_node: Option<String>,
    pub new_dialog_node: Option<String>,
    pub new_description: Option<String>,
    pub new_conditions: Option<String>,
    pub new_parent: Option<String>,
    pub new_previous_sibling: Option<String>,
    pub new_output: Option<Value>,
    pub new_context: Option<Value>,
    pub new_metadata: Option<Value>,
    pub new_next_step: Option<DialogNodeNextStep>,
    pub new_title: Option<String>,
    pub new_type: Option<NodeType>,
    pub new_event_name: Option<EventName>,
    pub new_variable: Option<String>,
    pub new_actions: Option<Vec<DialogNodeAction>>,
}

impl ConversationClient {
    pub fn list_dialog_nodes(&self, params: &ListDialogNodesParams) -> PendingCall {
        self.call(&LIST_DIALOG_NODES, params)
    }

    pub fn create_dialog_node(&self, params: &CreateDialogNodeParams) -> PendingCall {
        self.call(&CREATE_DIALOG_NODE, params)
    }

    pub fn get_dialog_node(&self, params: &DialogNodeParams) -> PendingCall {
        self.call(&GET_DIALOG_NODE, params)
    }

    pub fn update_dialog_node(&self, params: &UpdateDialogNodeParams) -> PendingCall {
        self.call(&UPDATE_DIALOG_NODE, params)
    }

    pub fn delete_dialog_node(&self, params: &DialogNodeParams) -> PendingCall {
        self.call(&DELETE_DIALOG_NODE, params)
    }
}
