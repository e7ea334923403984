//! Counterexamples: inputs explicitly marked as matching no intent.

use serde::{Deserialize, Serialize};

use super::PAGING;
use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;

static LIST_COUNTEREXAMPLES: Operation = Operation {
    name: "list_counterexamples",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/counterexamples",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: PAGING,
    body: None,
};

static CREATE_COUNTEREXAMPLE: Operation = Operation {
    name: "create_counterexample",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/counterexamples",
    required: &["workspace_id", "text"],
    path: &["workspace_id"],
    query: &[],
    body: Some(&[("text", "text")]),
};

static GET_COUNTEREXAMPLE: Operation = Operation {
    name: "get_counterexample",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/counterexamples/{text}",
    required: &["workspace_id", "text"],
    path: &["workspace_id", "text"],
    query: &[],
    body: None,
};

static UPDATE_COUNTEREXAMPLE: Operation = Operation {
    name: "update_counterexample",
    method: HttpMethod::Post,
    template: "/v1/workspaces/{workspace_id}/counterexamples/{text}",
    required: &["workspace_id", "text"],
    path: &["workspace_id", "text"],
    query: &[],
    body: Some(&[("text", "new_text")]),
};

static DELETE_COUNTEREXAMPLE: Operation = Operation {
    name: "delete_counterexample",
    method: HttpMethod::Delete,
    template: "/v1/workspaces/{workspace_id}/counterexamples/{text}",
    required: &["workspace_id", "text"],
    path: &["workspace_id", "text"],
    query: &[],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCounterexamplesParams {
    pub workspace_id: Option<String>,
    pub page_limit: Option<u32>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterexampleParams {
    pub workspace_id: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCounterexampleParams {
    pub workspace_id: Option<String>,
    pub text: Option<String>,
    pub new_text: Option<String>,
}

impl ConversationClient {
    pub fn list_counterexamples(&self, params: &ListCounterexamplesParams) -> PendingCall {
        self.call(&LIST_COUNTEREXAMPLES, params)
    }

    pub fn create_counterexample(&self, params: &CounterexampleParams) -> PendingCall {
        self.call(&CREATE_COUNTEREXAMPLE, params)
    }

    pub fn get_counterexample(&self, params: &CounterexampleParams) -> PendingCall {
        self.call(&GET_COUNTEREXAMPLE, params)
    }

    pub fn update_counterexample(&self, params: &UpdateCounterexampleParams) -> PendingCall {
        self.call(&UPDATE_COUNTEREXAMPLE, params)
    }

    pub fn delete_counterexample(&self, params: &CounterexampleParams) -> PendingCall {
        self.call(&DELETE_COUNTEREXAMPLE, params)
    }
}
