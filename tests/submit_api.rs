//! Submission adapter tests against a local mock endpoint.

use mockito::Matcher;

use chat_porter::config::{ApiConfig, ChatOptions};
use chat_porter::models::SourceFile;
use chat_porter::submit::{submit, ChatClient, ChatRequest, RawClient};

fn config_for(server: &mockito::ServerGuard) -> ApiConfig {
    ApiConfig {
        api_key: "test-key".to_string(),
        api_url: format!("{}/v1/chats/init", server.url()),
    }
}

fn sample_request() -> ChatRequest {
    let files = vec![SourceFile {
        name: "a.md".to_string(),
        content: "Hello".to_string(),
        size: 5,
    }];
    ChatRequest::files(&files, &ChatOptions::default())
}

#[tokio::test]
async fn successful_submission_returns_session_with_derived_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chats/init")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "type": "files",
            "lockAllFiles": false,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"chat_42"}"#)
        .create_async()
        .await;

    let session = submit(&config_for(&server), &sample_request())
        .await
        .unwrap();
    assert_eq!(session.id, "chat_42");
    assert_eq!(session.url, "https://v0.dev/chat/chat_42");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_error_body_message() {
    let mut server = mockito::Server::new_async().await;
    // The primary client and the single fallback each make one attempt.
    let mock = server
        .mock("POST", "/v1/chats/init")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"bad key"}"#)
        .expect(2)
        .create_async()
        .await;

    let err = submit(&config_for(&server), &sample_request())
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("401"), "missing status in: {}", message);
    assert!(message.contains("bad key"), "missing body in: {}", message);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_error_body_is_surfaced_raw() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chats/init")
        .with_status(502)
        .with_body("upstream exploded")
        .expect(2)
        .create_async()
        .await;

    let err = submit(&config_for(&server), &sample_request())
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("502"), "missing status in: {}", message);
    assert!(
        message.contains("upstream exploded"),
        "missing raw body in: {}",
        message
    );
}

#[tokio::test]
async fn raw_client_requires_an_id_field() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chats/init")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let err = RawClient
        .init_chat(&config_for(&server), &sample_request())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("missing id"));
}

#[tokio::test]
async fn repo_submission_posts_the_repo_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chats/init")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "type": "repo",
            "repo": { "url": "https://github.com/user/repo", "branch": "main" },
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"chat_repo"}"#)
        .create_async()
        .await;

    let options = ChatOptions {
        branch: Some("main".to_string()),
        ..Default::default()
    };
    let request = ChatRequest::repo("https://github.com/user/repo", &options);
    let session = submit(&config_for(&server), &request).await.unwrap();
    assert_eq!(session.id, "chat_repo");
    mock.assert_async().await;
}
