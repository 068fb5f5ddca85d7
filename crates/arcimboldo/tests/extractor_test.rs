//! End-to-end extraction tests against a stubbed backend.

use arcimboldo::{
    ArcimboldoErrorKind, ExtractionErrorKind, Extractor, GeminiResult, GenerateContentRequest,
    GenerateContentResponse, GenerationService, ModelRate, Payload, RequestAssembler,
    StaticPricingTable,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct StubService {
    reply: GenerateContentResponse,
    seen: Arc<Mutex<Option<GenerateContentRequest>>>,
}

impl StubService {
    fn new(reply: GenerateContentResponse) -> Self {
        Self {
            reply,
            seen: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl GenerationService for StubService {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        *self.seen.lock().expect("stub lock") = Some(request.clone());
        Ok(self.reply.clone())
    }
}

fn reply_with_text(text: &str) -> GenerateContentResponse {
    serde_json::from_value(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
        }],
        "usageMetadata": {
            "promptTokenCount": 1_000_000u64,
            "candidatesTokenCount": 500_000u64,
            "totalTokenCount": 1_500_000u64,
        },
    }))
    .expect("valid response fixture")
}

fn pricing() -> StaticPricingTable {
    let mut table = StaticPricingTable::new();
    table.insert("test-model", ModelRate::new(1.0, 2.0));
    table
}

#[tokio::test]
async fn extraction_parses_data_and_accounts_usage() {
    let service = StubService::new(reply_with_text(r#"{"name": "Ada", "age": 36}"#));
    let seen = service.seen.clone();
    let extractor = Extractor::new(service, RequestAssembler::new("test-model"), pricing());

    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "age": {"type": "integer"},
        },
        "additionalProperties": false,
    });

    let extraction = extractor
        .extract(&Payload::text("Ada, 36"), &schema)
        .await
        .expect("extraction succeeds");

    assert_eq!(extraction.data(), &json!({"name": "Ada", "age": 36}));
    assert!((extraction.report().input_cost() - 1.0).abs() < 1e-9);
    assert!((extraction.report().output_cost() - 1.0).abs() < 1e-9);
    assert!((extraction.report().total_cost() - 2.0).abs() < 1e-9);

    // The request that reached the backend carried the rewritten schema.
    let request = seen.lock().expect("stub lock").clone().expect("request captured");
    let config = request
        .generation_config()
        .as_ref()
        .expect("generation config present");
    assert_eq!(
        config.response_mime_type().as_deref(),
        Some("application/json"),
    );
    let schema_sent = config.response_schema().as_ref().expect("schema present");
    assert!(schema_sent.get("additionalProperties").is_none());
}

#[tokio::test]
async fn non_json_reply_is_a_response_format_error() {
    let service = StubService::new(reply_with_text("I would rather chat."));
    let extractor = Extractor::new(service, RequestAssembler::new("test-model"), pricing());

    let err = extractor
        .extract(&Payload::text("extract"), &json!({"type": "object"}))
        .await
        .expect_err("reply is not JSON");

    assert!(matches!(
        err.kind(),
        ArcimboldoErrorKind::Extraction(inner)
            if matches!(inner.kind, ExtractionErrorKind::ResponseFormat(_)),
    ));
}

#[tokio::test]
async fn candidate_free_reply_is_an_empty_response_error() {
    let reply: GenerateContentResponse =
        serde_json::from_value(json!({"candidates": []})).expect("valid response fixture");
    let extractor = Extractor::new(
        StubService::new(reply),
        RequestAssembler::new("test-model"),
        pricing(),
    );

    let err = extractor
        .extract(&Payload::text("extract"), &json!({"type": "object"}))
        .await
        .expect_err("nothing came back");

    assert!(matches!(
        err.kind(),
        ArcimboldoErrorKind::Extraction(inner)
            if matches!(inner.kind, ExtractionErrorKind::EmptyResponse),
    ));
}

#[tokio::test]
async fn unpriced_model_fails_accounting() {
    let service = StubService::new(reply_with_text(r#"{"ok": true}"#));
    let extractor = Extractor::new(
        service,
        RequestAssembler::new("unlisted-model"),
        StaticPricingTable::default(),
    );

    let err = extractor
        .extract(&Payload::text("extract"), &json!({"type": "object"}))
        .await
        .expect_err("model has no rates");

    assert!(matches!(err.kind(), ArcimboldoErrorKind::Pricing(_)));
}
