use serde::{Deserialize, Serialize};

use crate::client::{ConversationClient, PendingCall};
use crate::descriptor::Operation;
use crate::http::HttpMethod;

static LIST_LOGS: Operation = Operation {
    name: "list_logs",
    method: HttpMethod::Get,
    template: "/v1/workspaces/{workspace_id}/logs",
    required: &["workspace_id"],
    path: &["workspace_id"],
    query: &["sort", "filter", "page_limit", "cursor"],
    body: None,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLogsParams {
    pub workspace_id: Option<String>,
    /// Prefix with `-` for descending order, e.g. `-request_timestamp`.
    pub sort: Option<String>,
    /// Service-side filter expression.
    pub filter: Option<String>,
    pub page_limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ConversationClient {
    /// Message log events recorded for a workspace.
    pub fn list_logs(&self, params: &ListLogsParams) -> PendingCall {
        self.call(&LIST_LOGS, params)
    }
}
