//! End-to-end engine tests over HTTP

use std::sync::Mutex;

use async_trait::async_trait;
use httpmock::prelude::*;
use serde_json::json;
use snipgate_core::{
    EditorHost, HttpSnippetStore, MatchRequest, Position, Range, SnippetEngine,
    StaticContextValidator,
};
use url::Url;

/// Host that answers every prompt with a fixed name and records messages
struct RecordingHost {
    name: String,
    messages: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn answering(name: &str) -> Self {
        Self {
            name: name.to_string(),
            messages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EditorHost for RecordingHost {
    async fn prompt(&self, _title: &str) -> Option<String> {
        Some(self.name.clone())
    }

    fn show_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn catalog_body() -> serde_json::Value {
    json!({
        "snippets": [
            { "id": 1, "name": "fn", "content": "func ${1:name}() {\n}", "language": "go", "public": true },
            { "id": 2, "name": "todo", "content": "// TODO: $0", "language": "all", "public": true },
            { "id": 3, "name": "impl", "content": "impl $1 {}", "language": "rust", "public": true }
        ]
    })
}

fn engine_for(
    server: &MockServer,
    host: RecordingHost,
) -> SnippetEngine<HttpSnippetStore, StaticContextValidator, RecordingHost> {
    let base = Url::parse(&server.base_url()).unwrap();
    let store = HttpSnippetStore::new(&base, None).unwrap();
    SnippetEngine::new(store, StaticContextValidator::new(), host)
}

#[tokio::test]
async fn fetched_catalog_resolves_trigger() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).json_body(catalog_body());
        })
        .await;

    let mut engine = engine_for(&server, RecordingHost::answering("unused"));
    assert_eq!(engine.initialize().await.unwrap(), 3);

    let edits = engine
        .trigger_snippets(&MatchRequest::new(12, "  fn", 4, "go"))
        .await
        .unwrap();

    assert_eq!(edits.len(), 1);
    assert_eq!(
        edits[0].range,
        Range::new(Position::new(12, 2), Position::new(12, 4))
    );
    assert_eq!(edits[0].location, "1");
    assert_eq!(edits[0].description, "fn");
}

#[tokio::test]
async fn duplicate_name_never_posts() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).json_body(catalog_body());
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path("/snippets");
            then.status(201).json_body(json!({}));
        })
        .await;

    let mut engine = engine_for(&server, RecordingHost::answering("fn"));
    let created = engine.create_snippet("go", "func main() {}").await.unwrap();

    assert!(created.is_none());
    assert_eq!(post.hits_async().await, 0);
    let messages = engine_messages(&engine);
    assert_eq!(messages, vec!["Snippet \"fn\" already exists for go".to_string()]);
}

#[tokio::test]
async fn wildcard_name_counts_as_duplicate() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).json_body(catalog_body());
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path("/snippets");
            then.status(201).json_body(json!({}));
        })
        .await;

    let mut engine = engine_for(&server, RecordingHost::answering("todo"));

    assert!(engine.create_snippet("python", "# todo").await.unwrap().is_none());
    assert_eq!(post.hits_async().await, 0);
}

#[tokio::test]
async fn created_snippet_is_immediately_matchable() {
    let server = MockServer::start_async().await;
    let get = server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(200).json_body(catalog_body());
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path("/snippets").json_body(json!({
                "content": "if err != nil {\n\treturn err\n}",
                "name": "iferr",
                "public": true,
                "language": "go"
            }));
            then.status(201).json_body(json!({
                "id": 4,
                "name": "iferr",
                "content": "if err != nil {\n\treturn err\n}",
                "language": "go",
                "public": true
            }));
        })
        .await;

    let mut engine = engine_for(&server, RecordingHost::answering("iferr"));
    let created = engine
        .create_snippet("go", "if err != nil {\n\treturn err\n}")
        .await
        .unwrap()
        .unwrap();

    post.assert_async().await;
    // one fetch for the pre-create refresh, none after
    assert_eq!(get.hits_async().await, 1);
    assert_eq!(created.location, "4");

    let edits = engine
        .trigger_snippets(&MatchRequest::new(0, "\tiferr", 6, "go"))
        .await
        .unwrap();
    assert_eq!(edits.len(), 1);
    assert_eq!(edits[0].location, "4");
    assert_eq!(get.hits_async().await, 1);
}

#[tokio::test]
async fn failed_refresh_aborts_create() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/snippets");
            then.status(500);
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path("/snippets");
            then.status(201).json_body(json!({}));
        })
        .await;

    let mut engine = engine_for(&server, RecordingHost::answering("iferr"));

    assert!(engine.create_snippet("go", "x").await.is_err());
    assert_eq!(post.hits_async().await, 0);
}

fn engine_messages(
    engine: &SnippetEngine<HttpSnippetStore, StaticContextValidator, RecordingHost>,
) -> Vec<String> {
    engine.host().messages.lock().unwrap().clone()
}
