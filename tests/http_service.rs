//! HTTP client tests against a mock documentation service.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use autodocs::config::ApiConfig;
use autodocs::types::Error;
use autodocs::{DocService, HttpDocService};

fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        ..Default::default()
    }
}

#[tokio::test]
async fn document_posts_code_and_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/doc/"))
        .and(body_json(json!({ "code": "let x = 1;" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Document": [{ "function": "x", "DocString": "constant" }],
            "techstack": ["JavaScript"],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    let body = service.document("let x = 1;").await.unwrap();

    assert_eq!(body["techstack"], json!(["JavaScript"]));
}

#[tokio::test]
async fn non_2xx_maps_to_external_call_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/doc/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    match service.document("code").await {
        Err(Error::ExternalCall { status, message }) => {
            assert_eq!(status, Some(500));
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected ExternalCall, got {other:?}"),
    }
}

#[tokio::test]
async fn merge_charts_unwraps_flowchart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chart"))
        .and(body_json(json!({ "flowcharts": ["f1", "f2"] })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "flowchart": "graph TD; A-->B" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    let merged = service
        .merge_charts(&["f1".to_string(), "f2".to_string()])
        .await
        .unwrap();
    assert_eq!(merged, "graph TD; A-->B");
}

#[tokio::test]
async fn blank_flowchart_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "flowchart": "  " })))
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    assert!(matches!(
        service.merge_charts(&["f1".to_string()]).await,
        Err(Error::EmptyResult { what: "flowchart" })
    ));
}

#[tokio::test]
async fn readme_unwraps_markdown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/readme"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "markdown": "# Project\n" })),
        )
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    let markdown = service.readme(&json!({ "techstack": [] })).await.unwrap();
    assert_eq!(markdown, "# Project\n");
}

#[tokio::test]
async fn missing_markdown_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let service = HttpDocService::new(&api_config(&server)).unwrap();
    assert!(matches!(
        service.readme(&json!({})).await,
        Err(Error::EmptyResult { what: "markdown" })
    ));
}

#[tokio::test]
async fn bearer_token_is_attached_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/doc/"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig {
        api_key: Some("sekrit".to_string()),
        ..api_config(&server)
    };
    let service = HttpDocService::new(&config).unwrap();
    service.document("code").await.unwrap();
}
