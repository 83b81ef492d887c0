//! Tests for Gemini request building, response parsing, and HTTP handling.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::{AiError, CompletionProvider, Turn};

fn client_for(base_url: &str) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key").with_base_url(base_url)).unwrap()
}

#[test]
fn request_orders_system_history_then_message() {
    let client = client_for("http://unused");
    let history = vec![Turn::assistant("Hi!"), Turn::user("Who is Tulsi?")];

    let body = client.build_request_body("QUESTION:\nWho is Tulsi?", "  Be factual.  ", &history);
    let contents = body["contents"].as_array().unwrap();

    assert_eq!(contents.len(), 4);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(
        contents[0]["parts"][0]["text"],
        "SYSTEM INSTRUCTION:\nBe factual."
    );
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "Hi!");
    assert_eq!(contents[2]["role"], "user");
    assert_eq!(contents[3]["parts"][0]["text"], "QUESTION:\nWho is Tulsi?");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 900);
    assert_eq!(body["generationConfig"]["temperature"], 0.4);
}

#[test]
fn blank_system_prompt_is_omitted() {
    let client = client_for("http://unused");
    let body = client.build_request_body("hello", "   ", &[]);
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["parts"][0]["text"], "hello");
}

#[test]
fn only_recent_history_is_sent() {
    let client = client_for("http://unused");
    let history: Vec<Turn> = (0..12).map(|i| Turn::user(format!("turn {i}"))).collect();

    let body = client.build_request_body("next", "", &history);
    let contents = body["contents"].as_array().unwrap();

    // 8 history turns + the current message
    assert_eq!(contents.len(), 9);
    assert_eq!(contents[0]["parts"][0]["text"], "turn 4");
    assert_eq!(contents[7]["parts"][0]["text"], "turn 11");
}

#[test]
fn api_url_joins_base_and_model() {
    let client = client_for("https://example.com/v1/models/");
    assert_eq!(
        client.api_url(),
        "https://example.com/v1/models/gemini-2.5-flash:generateContent"
    );
}

#[test]
fn parse_response_joins_first_candidate_parts() {
    let json = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "Hello, " }, { "text": "world." }] } },
            { "content": { "parts": [{ "text": "ignored" }] } }
        ]
    });
    assert_eq!(GeminiClient::parse_response(&json), "Hello, world.");
}

#[test]
fn parse_response_without_candidates_is_empty() {
    assert_eq!(GeminiClient::parse_response(&json!({})), "");
    assert_eq!(
        GeminiClient::parse_response(&json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
        ""
    );
}

#[test]
fn debug_redacts_api_key() {
    let config = GeminiConfig::new("secret-key");
    let printed = format!("{config:?}");
    assert!(!printed.contains("secret-key"));
    assert!(printed.contains("[REDACTED]"));
}

#[tokio::test]
async fn complete_chat_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "maxOutputTokens": 900 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Tulsi is an engineer." }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let text = client
        .complete_chat("Who is Tulsi?", "", &[Turn::user("Who is Tulsi?")])
        .await
        .unwrap();
    assert_eq!(text, "Tulsi is an engineer.");
}

#[tokio::test]
async fn error_status_carries_code_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Quota exceeded. Please retry in 5.84s.",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.complete_chat("hi", "", &[]).await.unwrap_err();

    match &err {
        AiError::ApiError {
            provider,
            status,
            body,
        } => {
            assert_eq!(*provider, "Gemini");
            assert_eq!(*status, 429);
            assert!(body.contains("retry in 5.84s"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    assert_eq!(crate::parse_retry_seconds(&err.to_string()), Some(6));
}

#[tokio::test]
async fn unreadable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client.complete_chat("hi", "", &[]).await.unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}
