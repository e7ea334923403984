use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Intent, Workspace};
use serde_json::{json, Value};
use tower::ServiceExt;

const V: &str = "version=2017-05-26";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

async fn create_workspace(app: &Router, body: &str) -> Workspace {
    let resp = app
        .clone()
        .oneshot(json_request("POST", &format!("/v1/workspaces?{V}"), body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- version ---

#[tokio::test]
async fn missing_version_returns_400_with_error_body() {
    let resp = app().oneshot(get("/v1/workspaces")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert!(body["error"].as_str().unwrap().contains("version"));
}

#[tokio::test]
async fn empty_version_is_rejected() {
    let resp = app().oneshot(get("/v1/workspaces?version=")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- workspaces ---

#[tokio::test]
async fn list_workspaces_empty() {
    let resp = app().oneshot(get(&format!("/v1/workspaces?{V}"))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["workspaces"], json!([]));
    assert_eq!(body["pagination"]["refresh_url"], "/v1/workspaces");
}

#[tokio::test]
async fn create_workspace_defaults_language() {
    let app = app();
    let ws = create_workspace(&app, r#"{"name":"Car"}"#).await;

    assert_eq!(ws.name.as_deref(), Some("Car"));
    assert_eq!(ws.language, "en");
    assert!(!ws.learning_opt_out);
    assert!(!ws.workspace_id.is_empty());
}

#[tokio::test]
async fn list_workspaces_paginates() {
    let app = app();
    for name in ["a", "b", "c"] {
        create_workspace(&app, &format!(r#"{{"name":"{name}"}}"#)).await;
    }

    let resp = app
        .clone()
        .oneshot(get(&format!("/v1/workspaces?page_limit=2&{V}")))
        .await
        .unwrap();
    let first: Value = body_json(resp).await;
    assert_eq!(first["workspaces"].as_array().unwrap().len(), 2);
    let cursor = first["pagination"]["next_cursor"].as_str().unwrap().to_string();

    let resp = app
        .oneshot(get(&format!("/v1/workspaces?page_limit=2&cursor={cursor}&{V}")))
        .await
        .unwrap();
    let second: Value = body_json(resp).await;
    assert_eq!(second["workspaces"].as_array().unwrap().len(), 1);
    assert!(second["pagination"].get("next_cursor").is_none());
}

#[tokio::test]
async fn update_workspace_changes_only_given_fields() {
    let app = app();
    let ws = create_workspace(&app, r#"{"name":"Car","description":"dash"}"#).await;

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/workspaces/{}?{V}", ws.workspace_id),
            r#"{"name":"Truck"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Workspace = body_json(resp).await;
    assert_eq!(updated.name.as_deref(), Some("Truck"));
    assert_eq!(updated.description.as_deref(), Some("dash"));
}

#[tokio::test]
async fn get_workspace_not_found() {
    let resp = app()
        .oneshot(get(&format!("/v1/workspaces/nope?{V}")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn delete_workspace_then_get_is_404() {
    let app = app();
    let ws = create_workspace(&app, "{}").await;
    let uri = format!("/v1/workspaces/{}?{V}", ws.workspace_id);

    let resp = app
        .clone()
        .oneshot(Request::builder().method("DELETE").uri(&uri).body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"{}");

    let resp = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn export_includes_intents() {
    let app = app();
    let ws = create_workspace(
        &app,
        r#"{"intents":[{"intent":"greet","examples":[{"text":"hi"}]}]}"#,
    )
    .await;

    let resp = app
        .clone()
        .oneshot(get(&format!("/v1/workspaces/{}?{V}", ws.workspace_id)))
        .await
        .unwrap();
    let plain: Value = body_json(resp).await;
    assert!(plain.get("intents").is_none());

    let resp = app
        .oneshot(get(&format!("/v1/workspaces/{}?export=true&{V}", ws.workspace_id)))
        .await
        .unwrap();
    let exported: Workspace = body_json(resp).await;
    let intents = exported.intents.unwrap();
    assert_eq!(intents[0].intent, "greet");
    assert_eq!(intents[0].examples[0].text, "hi");
}

// --- intents ---

#[tokio::test]
async fn create_and_get_intent_with_reserved_characters() {
    let app = app();
    let ws = create_workspace(&app, "{}").await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/v1/workspaces/{}/intents?{V}", ws.workspace_id),
            r#"{"intent":"what/when?"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get(&format!(
            "/v1/workspaces/{}/intents/what%2Fwhen%3F?{V}",
            ws.workspace_id
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let intent: Intent = body_json(resp).await;
    assert_eq!(intent.intent, "what/when?");
}

#[tokio::test]
async fn duplicate_intent_returns_409() {
    let app = app();
    let ws = create_workspace(&app, r#"{"intents":[{"intent":"greet"}]}"#).await;

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/workspaces/{}/intents?{V}", ws.workspace_id),
            r#"{"intent":"greet"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn create_intent_without_name_returns_400() {
    let app = app();
    let ws = create_workspace(&app, "{}").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            &format!("/v1/workspaces/{}/intents?{V}", ws.workspace_id),
            r#"{"description":"no name"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_intent_renames_it() {
    let app = app();
    let ws = create_workspace(&app, r#"{"intents":[{"intent":"greet"}]}"#).await;
    let base = format!("/v1/workspaces/{}/intents", ws.workspace_id);

    let resp = app
        .clone()
        .oneshot(json_request("POST", &format!("{base}/greet?{V}"), r#"{"intent":"hello"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(get(&format!("{base}/greet?{V}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.oneshot(get(&format!("{base}/hello?{V}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_intents_hides_examples_unless_exported() {
    let app = app();
    let ws = create_workspace(
        &app,
        r#"{"intents":[{"intent":"greet","examples":[{"text":"hi"}]}]}"#,
    )
    .await;
    let base = format!("/v1/workspaces/{}/intents", ws.workspace_id);

    let resp = app.clone().oneshot(get(&format!("{base}?{V}"))).await.unwrap();
    let plain: Value = body_json(resp).await;
    assert!(plain["intents"][0].get("examples").is_none());

    let resp = app.oneshot(get(&format!("{base}?export=true&{V}"))).await.unwrap();
    let exported: Value = body_json(resp).await;
    assert_eq!(exported["intents"][0]["examples"], json!([{"text": "hi"}]));
}

// --- message ---

#[tokio::test]
async fn message_classifies_and_carries_context() {
    let app = app();
    let ws = create_workspace(
        &app,
        r#"{"intents":[{"intent":"greet","examples":[{"text":"hello"}]}]}"#,
    )
    .await;
    let uri = format!("/v1/workspaces/{}/message?{V}", ws.workspace_id);

    let resp = app
        .clone()
        .oneshot(json_request("POST", &uri, r#"{"input":{"text":"Hello"}}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first: Value = body_json(resp).await;
    assert_eq!(first["intents"][0]["intent"], "greet");
    assert_eq!(first["context"]["turn"], 1);
    let conversation_id = first["context"]["conversation_id"].clone();

    let next = json!({"input": {"text": "bye"}, "context": first["context"]}).to_string();
    let resp = app.oneshot(json_request("POST", &uri, &next)).await.unwrap();
    let second: Value = body_json(resp).await;
    assert_eq!(second["intents"], json!([]));
    assert_eq!(second["context"]["turn"], 2);
    assert_eq!(second["context"]["conversation_id"], conversation_id);
}

#[tokio::test]
async fn message_to_unknown_workspace_is_404() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            &format!("/v1/workspaces/nope/message?{V}"),
            r#"{"input":{"text":"hi"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
