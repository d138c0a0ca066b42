//! HTTP store client tests against `httpmock`

use httpmock::prelude::*;
use secrecy::SecretString;
use serde_json::json;
use snipgate_core::config::{ENV_API_TOKEN, ENV_API_URL};
use snipgate_core::{AppSettings, ConfigManager, HttpSnippetStore, NewRemoteSnippet, SnippetStore, StoreError};
use url::Url;

fn store_for(server: &MockServer, token: Option<&str>) -> HttpSnippetStore {
    let base = Url::parse(&server.base_url()).unwrap();
    HttpSnippetStore::new(&base, token.map(|t| SecretString::from(t.to_string()))).unwrap()
}

#[tokio::test]
async fn fetch_all_returns_records_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).json_body(json!({
                "snippets": [
                    {
                        "id": 2,
                        "name": "fn",
                        "content": "func ${1}() {}",
                        "language": "go",
                        "public": true,
                        "created_at": "2024-05-01T08:00:00Z",
                        "updated_at": "2024-05-01T08:00:00Z"
                    },
                    {
                        "id": "b7",
                        "name": "log",
                        "content": "console.log($1)",
                        "language": "javascript",
                        "public": false,
                        "created_at": null,
                        "updated_at": null
                    }
                ]
            }));
        })
        .await;

    let records = store_for(&server, None).fetch_all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "2");
    assert_eq!(records[0].name, "fn");
    assert_eq!(records[1].id, "b7");
    assert_eq!(records[1].language, "javascript");
}

#[tokio::test]
async fn fetch_all_sends_bearer_token_when_configured() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/snippets")
                .header("authorization", "Bearer t0ken");
            then.status(200).json_body(json!({ "snippets": [] }));
        })
        .await;

    let records = store_for(&server, Some("t0ken")).fetch_all().await.unwrap();

    mock.assert_async().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_all_non_success_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(503).body("maintenance");
        })
        .await;

    let err = store_for(&server, None).fetch_all().await.unwrap_err();

    match err {
        StoreError::Transport(message) => assert!(message.contains("503"), "{message}"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = store_for(&server, None).fetch_all().await.unwrap_err();

    assert!(matches!(err, StoreError::Parse(_)), "{err:?}");
}

#[tokio::test]
async fn fetch_all_unreachable_server_is_transport_error() {
    let base = Url::parse("http://127.0.0.1:9").unwrap();
    let store = HttpSnippetStore::new(&base, None).unwrap();

    let err = store.fetch_all().await.unwrap_err();

    assert!(matches!(err, StoreError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn create_posts_json_with_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/snippets")
                .header("accept", "application/json")
                .header("content-type", "application/json")
                .header_exists("content-length")
                .header("authorization", "Bearer t0ken")
                .json_body(json!({
                    "content": "if err != nil { return err }",
                    "name": "iferr",
                    "public": true,
                    "language": "go"
                }));
            then.status(201).json_body(json!({
                "id": 99,
                "name": "iferr",
                "content": "if err != nil { return err }",
                "language": "go",
                "public": true
            }));
        })
        .await;

    let created = store_for(&server, Some("t0ken"))
        .create(&NewRemoteSnippet::new(
            "iferr",
            "if err != nil { return err }",
            "go",
        ))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "99");
    assert_eq!(created.name, "iferr");
}

#[tokio::test]
async fn create_rejected_by_server_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/snippets");
            then.status(401).json_body(json!({ "error": "unauthorized" }));
        })
        .await;

    let err = store_for(&server, None)
        .create(&NewRemoteSnippet::new("x", "y", "go"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn store_built_from_env_overrides_sends_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/snippets")
                .header("authorization", "Bearer env-token");
            then.status(200).json_body(json!({ "snippets": [] }));
        })
        .await;

    let base = server.base_url();
    let mut settings = AppSettings::default();
    ConfigManager::apply_overrides(&mut settings, |key| match key {
        ENV_API_URL => Some(base.clone()),
        ENV_API_TOKEN => Some("env-token".to_string()),
        _ => None,
    });
    let url = ConfigManager::validate_settings(&settings).unwrap();
    let store = HttpSnippetStore::new(&url, settings.store.api_token.clone()).unwrap();

    assert!(store.fetch_all().await.unwrap().is_empty());
    mock.assert_async().await;
}
