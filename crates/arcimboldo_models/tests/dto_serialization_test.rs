//! Wire-shape tests for the Gemini DTOs.

use arcimboldo_models::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use serde_json::json;

#[test]
fn request_body_uses_camel_case_and_omits_model() {
    let config = GenerationConfig::builder()
        .response_mime_type(Some("application/json".to_string()))
        .response_schema(Some(json!({"type": "object"})))
        .build()
        .expect("valid config");

    let request = GenerateContentRequest::builder()
        .model("gemini-2.0-flash")
        .contents(vec![Content::user(vec![Part::text("extract this")])])
        .generation_config(Some(config))
        .build()
        .expect("valid request");

    let body = serde_json::to_value(&request).expect("serializable");

    assert!(body.get("model").is_none(), "model belongs in the URL path");
    assert_eq!(body["contents"][0]["role"], json!("user"));
    assert_eq!(body["contents"][0]["parts"][0], json!({"text": "extract this"}));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        json!("application/json"),
    );
    assert_eq!(
        body["generationConfig"]["responseSchema"],
        json!({"type": "object"}),
    );
    assert!(body.get("systemInstruction").is_none());
}

#[test]
fn inline_part_serializes_mime_and_data() {
    let part = Part::inline("image/png", "aGVsbG8=");
    let body = serde_json::to_value(&part).expect("serializable");

    assert_eq!(
        body,
        json!({"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}),
    );
}

#[test]
fn unset_generation_knobs_are_skipped() {
    let config = GenerationConfig::builder()
        .temperature(Some(0.2f32))
        .build()
        .expect("valid config");
    let body = serde_json::to_value(&config).expect("serializable");

    assert_eq!(body.as_object().map(|o| o.len()), Some(1));
    assert!((body["temperature"].as_f64().expect("number") - 0.2).abs() < 1e-6);
}

#[test]
fn response_parses_text_and_usage() {
    let raw = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "{\"name\":"}, {"text": "\"Ada\"}"}],
            },
            "finishReason": "STOP",
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 15,
            "totalTokenCount": 135,
        },
        "modelVersion": "gemini-2.0-flash-001",
    });

    let response: GenerateContentResponse =
        serde_json::from_value(raw).expect("valid response shape");

    assert_eq!(response.text().as_deref(), Some("{\"name\":\"Ada\"}"));
    let usage = response.usage();
    assert_eq!(*usage.input_tokens(), 120);
    assert_eq!(*usage.output_tokens(), 15);
    assert_eq!(*usage.total_tokens(), 135);
}

#[test]
fn response_total_falls_back_to_the_sum() {
    let raw = json!({
        "candidates": [],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4},
    });

    let response: GenerateContentResponse =
        serde_json::from_value(raw).expect("valid response shape");

    assert_eq!(*response.usage().total_tokens(), 14);
    assert!(response.text().is_none());
}

#[test]
fn empty_response_yields_zero_usage() {
    let response: GenerateContentResponse =
        serde_json::from_value(json!({})).expect("valid response shape");

    assert_eq!(*response.usage().total_tokens(), 0);
    assert!(response.text().is_none());
}
