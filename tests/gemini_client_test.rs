// HTTP-level tests for the Gemini client against a mock server.

use buddy::genai::client::GeminiClient;
use buddy::genai::{GenerationError, GenerationOptions, TextGenerator};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn test_generate_content_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("a synopsis")))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri(), "test-key".to_string());
    let text = client
        .generate_content("gemini-2.5-flash", "prompt", &GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "a synopsis");
}

#[tokio::test]
async fn test_system_instruction_is_sent_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [ { "text": "act as an editor" } ] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri(), "test-key".to_string());
    let options = GenerationOptions {
        system_instruction: Some("act as an editor".to_string()),
        enable_search_augmentation: false,
    };
    client
        .generate_content("gemini-2.5-flash", "prompt", &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_augmentation_adds_search_tool_to_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "tools": [ { "google_search": {} } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("#tags")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri(), "test-key".to_string());
    let options = GenerationOptions {
        system_instruction: None,
        enable_search_augmentation: true,
    };
    client
        .generate_content("gemini-2.5-flash", "prompt", &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri(), "test-key".to_string());
    let error = client
        .generate_content("gemini-3-pro-preview", "prompt", &GenerationOptions::default())
        .await
        .unwrap_err();

    match error {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "permission denied");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_is_empty_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri(), "test-key".to_string());
    let error = client
        .generate_content("gemini-2.5-flash", "prompt", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(error, GenerationError::EmptyResponse));
}

#[test]
#[serial]
fn test_from_env_requires_a_key() {
    std::env::remove_var("GEMINI_API_KEY");
    std::env::remove_var("API_KEY");
    assert!(matches!(
        GeminiClient::from_env(),
        Err(GenerationError::MissingApiKey)
    ));

    std::env::set_var("GEMINI_API_KEY", "abc");
    assert!(GeminiClient::from_env().is_ok());
    std::env::remove_var("GEMINI_API_KEY");
}
