//! Live Gemini API tests, gated behind the `api` feature.

use arcimboldo_models::{
    Content, GeminiClient, GenerateContentRequest, GenerationConfig, Part,
};
use serde_json::json;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_structured_generation() {
    dotenvy::dotenv().ok();

    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set for API tests");

    let config = GenerationConfig::builder()
        .response_mime_type(Some("application/json".to_string()))
        .response_schema(Some(json!({
            "type": "object",
            "properties": {"answer": {"type": "string"}},
            "required": ["answer"],
        })))
        .build()
        .expect("valid config");

    let request = GenerateContentRequest::builder()
        .model("gemini-2.0-flash")
        .contents(vec![Content::user(vec![Part::text(
            "Reply with the single word 'test'.",
        )])])
        .generation_config(Some(config))
        .build()
        .expect("valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    let text = response.text().expect("candidate text present");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("structured JSON reply");
    assert!(parsed.get("answer").is_some());
    assert!(*response.usage().total_tokens() > 0);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_reports_usage_metadata() {
    dotenvy::dotenv().ok();

    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set for API tests");

    let request = GenerateContentRequest::builder()
        .model("gemini-2.0-flash")
        .contents(vec![Content::user(vec![Part::text("Count to 3.")])])
        .build()
        .expect("valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    let usage = response.usage();
    assert!(*usage.input_tokens() > 0);
    println!("usage: {:?}", usage);
}
