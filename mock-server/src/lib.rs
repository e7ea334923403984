//! In-memory stand-in for the conversation service.
//!
//! Covers workspaces, intents (with their examples) and the `message` turn,
//! enough to drive the client end to end. Every route requires a `version`
//! query parameter, as the real service does.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub learning_opt_out: bool,
    /// Only present on exported reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WorkspaceInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub metadata: Option<Value>,
    pub learning_opt_out: Option<bool>,
    pub intents: Option<Vec<Intent>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IntentInput {
    pub intent: Option<String>,
    pub description: Option<String>,
    pub examples: Option<Vec<Example>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    pub input: Option<Value>,
    pub context: Option<Value>,
    #[serde(default)]
    pub alternate_intents: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page_limit: Option<usize>,
    pub cursor: Option<String>,
    #[serde(default)]
    pub export: bool,
}

struct WorkspaceRecord {
    workspace: Workspace,
    intents: BTreeMap<String, Intent>,
}

impl WorkspaceRecord {
    fn view(&self, export: bool) -> Workspace {
        let mut workspace = self.workspace.clone();
        if export {
            workspace.intents = Some(self.intents.values().cloned().collect());
        }
        workspace
    }
}

type Db = Arc<RwLock<HashMap<String, WorkspaceRecord>>>;

/// Error body in the service's shape: `{"error": ..., "code": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(what: &str, name: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} '{name}' not found"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({"error": self.message, "code": self.status.as_u16()});
        (self.status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1/workspaces", get(list_workspaces).post(create_workspace))
        .route(
            "/v1/workspaces/{workspace_id}",
            get(get_workspace).post(update_workspace).delete(delete_workspace),
        )
        .route(
            "/v1/workspaces/{workspace_id}/intents",
            get(list_intents).post(create_intent),
        )
        .route(
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            get(get_intent).post(update_intent).delete(delete_intent),
        )
        .route("/v1/workspaces/{workspace_id}/message", post(message))
        .layer(middleware::from_fn(require_version))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_version(
    Query(params): Query<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    match params.get("version") {
        Some(version) if !version.is_empty() => next.run(request).await,
        _ => ApiError::new(StatusCode::BAD_REQUEST, "Missing required query parameter 'version'")
            .into_response(),
    }
}

/// `cursor` is the offset of the first element on the page.
fn paginate<T: Serialize>(items: Vec<T>, query: &ListQuery, refresh: &str) -> Value {
    let start = query
        .cursor
        .as_deref()
        .and_then(|cursor| cursor.parse::<usize>().ok())
        .unwrap_or(0)
        .min(items.len());
    let limit = query.page_limit.unwrap_or(100);
    let end = start.saturating_add(limit).min(items.len());
    let mut pagination = json!({"refresh_url": refresh});
    if end < items.len() {
        pagination["next_cursor"] = json!(end.to_string());
    }
    let page: Vec<&T> = items[start..end].iter().collect();
    json!({"items": page, "pagination": pagination})
}

async fn list_workspaces(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Value> {
    let records = db.read().await;
    let mut workspaces: Vec<Workspace> = records.values().map(|r| r.view(false)).collect();
    workspaces.sort_by(|a, b| a.workspace_id.cmp(&b.workspace_id));
    let mut page = paginate(workspaces, &query, "/v1/workspaces");
    let items = page["items"].take();
    Json(json!({"workspaces": items, "pagination": page["pagination"]}))
}

async fn create_workspace(
    State(db): State<Db>,
    Json(input): Json<WorkspaceInput>,
) -> (StatusCode, Json<Workspace>) {
    let workspace = Workspace {
        workspace_id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        language: input.language.unwrap_or_else(|| "en".to_string()),
        metadata: input.metadata,
        learning_opt_out: input.learning_opt_out.unwrap_or(false),
        intents: None,
    };
    let intents = input
        .intents
        .unwrap_or_default()
        .into_iter()
        .map(|intent| (intent.intent.clone(), intent))
        .collect();
    debug!(workspace_id = %workspace.workspace_id, "workspace created");
    let record = WorkspaceRecord {
        workspace: workspace.clone(),
        intents,
    };
    db.write().await.insert(workspace.workspace_id.clone(), record);
    (StatusCode::CREATED, Json(workspace))
}

async fn get_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Workspace>, ApiError> {
    let records = db.read().await;
    let record = records
        .get(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    Ok(Json(record.view(query.export)))
}

async fn update_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Json(input): Json<WorkspaceInput>,
) -> Result<Json<Workspace>, ApiError> {
    let mut records = db.write().await;
    let record = records
        .get_mut(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    let workspace = &mut record.workspace;
    if let Some(name) = input.name {
        workspace.name = Some(name);
    }
    if let Some(description) = input.description {
        workspace.description = Some(description);
    }
    if let Some(language) = input.language {
        workspace.language = language;
    }
    if let Some(metadata) = input.metadata {
        workspace.metadata = Some(metadata);
    }
    if let Some(learning_opt_out) = input.learning_opt_out {
        workspace.learning_opt_out = learning_opt_out;
    }
    if let Some(intents) = input.intents {
        record.intents = intents
            .into_iter()
            .map(|intent| (intent.intent.clone(), intent))
            .collect();
    }
    Ok(Json(record.view(false)))
}

async fn delete_workspace(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut records = db.write().await;
    records
        .remove(&workspace_id)
        .map(|_| Json(json!({})))
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))
}

async fn list_intents(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let records = db.read().await;
    let record = records
        .get(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    let intents: Vec<Value> = record
        .intents
        .values()
        .map(|intent| {
            if query.export {
                json!(intent)
            } else {
                json!({"intent": intent.intent, "description": intent.description})
            }
        })
        .collect();
    let refresh = format!("/v1/workspaces/{workspace_id}/intents");
    let mut page = paginate(intents, &query, &refresh);
    let items = page["items"].take();
    Ok(Json(json!({"intents": items, "pagination": page["pagination"]})))
}

async fn create_intent(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Json(input): Json<IntentInput>,
) -> Result<(StatusCode, Json<Intent>), ApiError> {
    let name = input
        .intent
        .ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "Missing required field 'intent'"))?;
    let mut records = db.write().await;
    let record = records
        .get_mut(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    if record.intents.contains_key(&name) {
        return Err(ApiError::new(
            StatusCode::CONFLICT,
            format!("Unique Violation: intent '{name}' already exists"),
        ));
    }
    let intent = Intent {
        intent: name.clone(),
        description: input.description,
        examples: input.examples.unwrap_or_default(),
    };
    record.intents.insert(name, intent.clone());
    Ok((StatusCode::CREATED, Json(intent)))
}

async fn get_intent(
    State(db): State<Db>,
    Path((workspace_id, name)): Path<(String, String)>,
) -> Result<Json<Intent>, ApiError> {
    let records = db.read().await;
    let record = records
        .get(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    record
        .intents
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Intent", &name))
}

async fn update_intent(
    State(db): State<Db>,
    Path((workspace_id, name)): Path<(String, String)>,
    Json(input): Json<IntentInput>,
) -> Result<Json<Intent>, ApiError> {
    let mut records = db.write().await;
    let record = records
        .get_mut(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    let mut intent = record
        .intents
        .remove(&name)
        .ok_or_else(|| ApiError::not_found("Intent", &name))?;
    if let Some(new_name) = input.intent {
        intent.intent = new_name;
    }
    if let Some(description) = input.description {
        intent.description = Some(description);
    }
    if let Some(examples) = input.examples {
        intent.examples = examples;
    }
    record.intents.insert(intent.intent.clone(), intent.clone());
    Ok(Json(intent))
}

async fn delete_intent(
    State(db): State<Db>,
    Path((workspace_id, name)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let mut records = db.write().await;
    let record = records
        .get_mut(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;
    record
        .intents
        .remove(&name)
        .map(|_| Json(json!({})))
        .ok_or_else(|| ApiError::not_found("Intent", &name))
}

/// Classifies by exact (case-insensitive) match against intent examples.
fn classify(intents: &BTreeMap<String, Intent>, text: &str) -> Vec<Value> {
    let text = text.trim().to_lowercase();
    intents
        .values()
        .filter(|intent| {
            intent
                .examples
                .iter()
                .any(|example| example.text.to_lowercase() == text)
        })
        .map(|intent| json!({"intent": intent.intent, "confidence": 1.0}))
        .collect()
}

async fn message(
    State(db): State<Db>,
    Path(workspace_id): Path<String>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<Value>, ApiError> {
    let records = db.read().await;
    let record = records
        .get(&workspace_id)
        .ok_or_else(|| ApiError::not_found("Workspace", &workspace_id))?;

    let input = request.input.unwrap_or_else(|| json!({}));
    let text = input.get("text").and_then(Value::as_str).unwrap_or_default();
    let mut intents = classify(&record.intents, text);
    if !request.alternate_intents {
        intents.truncate(1);
    }

    let mut context = match request.context {
        Some(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    context
        .entry("conversation_id")
        .or_insert_with(|| json!(Uuid::new_v4().to_string()));
    let turn = context
        .get("turn")
        .and_then(Value::as_u64)
        .unwrap_or(0)
        .saturating_add(1);
    context.insert("turn".to_string(), json!(turn));

    let reply = match intents.first().and_then(|top| top["intent"].as_str()) {
        Some(intent) => format!("Matched #{intent}"),
        None => "I didn't understand. You can try rephrasing.".to_string(),
    };

    Ok(Json(json!({
        "input": input,
        "intents": intents,
        "entities": [],
        "output": {"text": [reply]},
        "context": context,
    })))
}
