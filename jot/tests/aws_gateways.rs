//! Wire-level tests for the AWS-backed gateways against stub endpoints.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jot::error::JotError;
use jot::llm::{BedrockRuntime, CompletionOptions, InferenceGateway, ModelRuntime};
use jot::store::{NoteStore, S3NoteStore};

const MODEL_ID: &str = "anthropic.claude-v2";

fn s3_client(endpoint: &str) -> aws_sdk_s3::Client {
    let credentials = aws_sdk_s3::config::Credentials::new("test", "test", None, None, "static");
    let config = aws_sdk_s3::config::Builder::new()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .retry_config(aws_sdk_s3::config::retry::RetryConfig::disabled())
        .endpoint_url(endpoint)
        .force_path_style(true)
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

fn bedrock_runtime(endpoint: &str) -> BedrockRuntime {
    let credentials =
        aws_sdk_bedrockruntime::config::Credentials::new("test", "test", None, None, "static");

    let runtime_config = aws_sdk_bedrockruntime::config::Builder::new()
        .behavior_version(aws_sdk_bedrockruntime::config::BehaviorVersion::latest())
        .region(aws_sdk_bedrockruntime::config::Region::new("us-east-1"))
        .credentials_provider(credentials.clone())
        .retry_config(aws_sdk_bedrockruntime::config::retry::RetryConfig::disabled())
        .endpoint_url(endpoint)
        .build();

    let control_config = aws_sdk_bedrock::config::Builder::new()
        .behavior_version(aws_sdk_bedrock::config::BehaviorVersion::latest())
        .region(aws_sdk_bedrock::config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .retry_config(aws_sdk_bedrock::config::retry::RetryConfig::disabled())
        .endpoint_url(endpoint)
        .build();

    BedrockRuntime::new(
        aws_sdk_bedrockruntime::Client::from_conf(runtime_config),
        aws_sdk_bedrock::Client::from_conf(control_config),
    )
}

#[tokio::test]
async fn put_writes_one_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/notes/7f6b2e4c.txt"))
        .and(body_string_contains("hello"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = S3NoteStore::new(s3_client(&server.uri()), "notes");
    store.put("7f6b2e4c.txt", b"hello").await.unwrap();
}

#[tokio::test]
async fn list_keys_filters_to_note_suffix() {
    let server = MockServer::start().await;
    let listing = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>notes</Name>
  <KeyCount>3</KeyCount>
  <IsTruncated>false</IsTruncated>
  <Contents><Key>a.txt</Key></Contents>
  <Contents><Key>image.png</Key></Contents>
  <Contents><Key>b.txt</Key></Contents>
</ListBucketResult>"#;
    Mock::given(method("GET"))
        .and(path("/notes/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(listing, "application/xml"))
        .mount(&server)
        .await;

    let store = S3NoteStore::new(s3_client(&server.uri()), "notes");
    let keys = store.list_keys().await.unwrap();
    assert_eq!(keys, vec!["a.txt".to_string(), "b.txt".to_string()]);
}

#[tokio::test]
async fn get_returns_object_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/a.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("nota bene", "text/plain"))
        .mount(&server)
        .await;

    let store = S3NoteStore::new(s3_client(&server.uri()), "notes");
    let bytes = store.get("a.txt").await.unwrap();
    assert_eq!(bytes, b"nota bene");
}

#[tokio::test]
async fn store_errors_surface_as_store_errors() {
    let server = MockServer::start().await;
    let error = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>"#;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(403).set_body_raw(error, "application/xml"))
        .mount(&server)
        .await;

    let store = S3NoteStore::new(s3_client(&server.uri()), "notes");
    let result = store.list_keys().await;
    assert!(matches!(result, Err(JotError::Store(_))));
}

#[tokio::test]
async fn invoke_posts_the_adapter_body_and_parses_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/model/{MODEL_ID}/invoke")))
        .and(body_partial_json(json!({
            "anthropic_version": "bedrock-2023-05-31",
            "max_tokens": 1000,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            json!({ "content": [{ "type": "text", "text": "a digest" }] }).to_string(),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = InferenceGateway::new(
        Arc::new(bedrock_runtime(&server.uri())),
        MODEL_ID.to_string(),
    );
    let output = gateway
        .generate("summarize this", &CompletionOptions::default())
        .await
        .unwrap();
    assert_eq!(output, "a digest");
}

#[tokio::test]
async fn invoke_failure_surfaces_as_inference_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/model/{MODEL_ID}/invoke")))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            json!({ "message": "internal failure" }).to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let gateway = InferenceGateway::new(
        Arc::new(bedrock_runtime(&server.uri())),
        MODEL_ID.to_string(),
    );
    let result = gateway
        .generate("summarize this", &CompletionOptions::default())
        .await;
    assert!(matches!(result, Err(JotError::Inference(_))));
}

#[tokio::test]
async fn catalog_lists_model_identifiers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foundation-models"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            json!({
                "modelSummaries": [
                    {
                        "modelArn": "arn:aws:bedrock:us-east-1::foundation-model/anthropic.claude-v2",
                        "modelId": "anthropic.claude-v2"
                    },
                    {
                        "modelArn": "arn:aws:bedrock:us-east-1::foundation-model/amazon.titan-text-lite-v1",
                        "modelId": "amazon.titan-text-lite-v1"
                    }
                ]
            })
            .to_string(),
            "application/json",
        ))
        .mount(&server)
        .await;

    let runtime = bedrock_runtime(&server.uri());
    let models = runtime.catalog().await.unwrap();
    assert_eq!(
        models,
        vec![
            "anthropic.claude-v2".to_string(),
            "amazon.titan-text-lite-v1".to_string()
        ]
    );
}
