//! Lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP with the default `UreqTransport`. Validates that request
//! construction and response classification agree with an actual server.

use conversation_core::{
    ConversationClient, ConversationError, CreateExample, CreateIntentParams,
    CreateWorkspaceParams, DeleteIntentParams, DeleteWorkspaceParams, GetIntentParams,
    GetWorkspaceParams, ListIntentsParams, ListWorkspacesParams, MessageInput, MessageParams,
    RequestOptions, ServiceConfig, TransportErrorKind, UpdateIntentParams,
};
use serde_json::{json, Value};

/// Bind the mock server to a random port on its own runtime thread.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> ConversationClient {
    let config = ServiceConfig::builder()
        .base_url(base_url)
        .version_date("2017-05-26")
        .build()
        .unwrap();
    ConversationClient::new(config)
}

fn some(text: &str) -> Option<String> {
    Some(text.to_string())
}

#[tokio::test(flavor = "multi_thread")]
async fn workspace_and_intent_lifecycle() {
    let client = client(&start_server());

    // Step 1: list, should be empty.
    let listed = client
        .list_workspaces(&ListWorkspacesParams::default())
        .await
        .unwrap();
    assert_eq!(listed["workspaces"], json!([]));

    // Step 2: create a workspace.
    let created = client
        .create_workspace(&CreateWorkspaceParams {
            name: some("Car dashboard"),
            description: some("Integration test"),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created["name"], "Car dashboard");
    assert_eq!(created["language"], "en");
    let workspace_id = created["workspace_id"].as_str().unwrap().to_string();

    // Step 3: create an intent with one example.
    let intent = client
        .create_intent(&CreateIntentParams {
            workspace_id: Some(workspace_id.clone()),
            intent: some("turn_on"),
            examples: Some(vec![CreateExample {
                text: "turn on the radio".to_string(),
            }]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(intent["intent"], "turn_on");

    // Step 4: rename it.
    let renamed = client
        .update_intent(&UpdateIntentParams {
            workspace_id: Some(workspace_id.clone()),
            intent: some("turn_on"),
            new_intent: some("switch_on"),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(renamed["intent"], "switch_on");
    assert_eq!(renamed["examples"][0]["text"], "turn on the radio");

    // Step 5: list intents, exported so examples come along.
    let intents = client
        .list_intents(&ListIntentsParams {
            workspace_id: Some(workspace_id.clone()),
            export: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(intents["intents"].as_array().unwrap().len(), 1);
    assert_eq!(intents["intents"][0]["examples"][0]["text"], "turn on the radio");

    // Step 6: a message turn is classified against the examples.
    let reply = client
        .message(&MessageParams {
            workspace_id: Some(workspace_id.clone()),
            input: Some(MessageInput {
                text: "Turn on the radio".to_string(),
            }),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(reply["intents"][0]["intent"], "switch_on");
    assert_eq!(reply["context"]["turn"], 1);

    // Step 7: delete the intent, then it is gone.
    client
        .delete_intent(&DeleteIntentParams {
            workspace_id: Some(workspace_id.clone()),
            intent: some("switch_on"),
        })
        .await
        .unwrap();
    let err = client
        .get_intent(&GetIntentParams {
            workspace_id: Some(workspace_id.clone()),
            intent: some("switch_on"),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "expected 404, got {err}");

    // Step 8: delete the workspace.
    client
        .delete_workspace(&DeleteWorkspaceParams {
            workspace_id: Some(workspace_id.clone()),
        })
        .await
        .unwrap();
    let err = client
        .get_workspace(&GetWorkspaceParams {
            workspace_id: Some(workspace_id),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(flavor = "multi_thread")]
async fn reserved_characters_survive_the_round_trip() {
    let client = client(&start_server());
    let created = client
        .create_workspace(&CreateWorkspaceParams::default())
        .await
        .unwrap();
    let workspace_id = created["workspace_id"].as_str().unwrap().to_string();

    for name in ["what/when?", "100% sure", "café #1"] {
        client
            .create_intent(&CreateIntentParams {
                workspace_id: Some(workspace_id.clone()),
                intent: some(name),
                ..Default::default()
            })
            .await
            .unwrap();

        let fetched = client
            .get_intent(&GetIntentParams {
                workspace_id: Some(workspace_id.clone()),
                intent: some(name),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(fetched["intent"], name);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_intent_is_an_api_error_with_body() {
    let client = client(&start_server());
    let created = client
        .create_workspace(&CreateWorkspaceParams::default())
        .await
        .unwrap();
    let params = CreateIntentParams {
        workspace_id: created["workspace_id"].as_str().map(str::to_string),
        intent: some("greet"),
        ..Default::default()
    };

    client.create_intent(&params).await.unwrap();
    let err = client.create_intent(&params).await.unwrap_err();
    match err {
        ConversationError::Api { status, message, body } => {
            assert_eq!(status, 409);
            assert!(message.contains("Unique Violation"), "message: {message}");
            assert_eq!(body.unwrap()["code"], 409);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn service_rejects_calls_without_version() {
    let client = client(&start_server());
    let err = client
        .list_workspaces(&ListWorkspacesParams::default())
        .with_options(RequestOptions::new().query("version", ""))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test(flavor = "multi_thread")]
async fn callback_form_works_over_http() {
    let client = client(&start_server());
    let (tx, rx) = tokio::sync::oneshot::channel::<Result<Value, String>>();

    client
        .list_workspaces(&ListWorkspacesParams {
            page_limit: Some(5),
            ..Default::default()
        })
        .on_complete(move |result| {
            let _ = tx.send(result.map(|response| response.body).map_err(|e| e.to_string()));
        })
        .await;

    let body = rx.await.unwrap().unwrap();
    assert_eq!(body["workspaces"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_service_is_a_connect_failure() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = client(&format!("http://{addr}"));

    let err = client
        .list_workspaces(&ListWorkspacesParams::default())
        .await
        .unwrap_err();
    match err {
        ConversationError::Transport { kind, .. } => assert_eq!(kind, TransportErrorKind::Connect),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn calls_can_be_driven_by_a_non_tokio_executor() {
    let client = client(&start_server());

    let response = futures::executor::block_on(
        client
            .list_workspaces(&ListWorkspacesParams::default())
            .send(),
    )
    .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["workspaces"], json!([]));
}
