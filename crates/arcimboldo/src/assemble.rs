//! Extraction request assembly.

use arcimboldo_core::{MediaSource, Payload};
use arcimboldo_error::{ArcimboldoResult, ExtractionError, ExtractionErrorKind};
use arcimboldo_models::{Content, GenerateContentRequest, GenerationConfig, Part};
use arcimboldo_schema::normalize_value;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use serde_json::Value;

/// Assembles one outbound structured-generation request from a payload and
/// a response schema.
///
/// The schema is passed through the dialect rewrite before it is embedded,
/// so callers may hand over either raw or already-normalized documents (the
/// rewrite is idempotent).
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RequestAssembler {
    /// Target model identifier
    model: String,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token cap
    #[builder(default)]
    max_output_tokens: Option<u32>,
    /// System instruction prepended to every call
    #[builder(default)]
    system_instruction: Option<String>,
}

impl RequestAssembler {
    /// Creates an assembler with no generation knobs set.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            max_output_tokens: None,
            system_instruction: None,
        }
    }

    /// Creates a builder for RequestAssembler.
    pub fn builder() -> RequestAssemblerBuilder {
        RequestAssemblerBuilder::default()
    }

    /// Builds the request: one user content from the payload, plus a
    /// generation config constraining the response to JSON in the
    /// normalized schema's shape.
    #[tracing::instrument(skip(self, payload, schema), fields(model = %self.model))]
    pub fn assemble(
        &self,
        payload: &Payload,
        schema: &Value,
    ) -> ArcimboldoResult<GenerateContentRequest> {
        let part = self.payload_part(payload)?;

        let config = GenerationConfig::builder()
            .response_mime_type(Some("application/json".to_string()))
            .response_schema(Some(normalize_value(schema)))
            .temperature(self.temperature)
            .max_output_tokens(self.max_output_tokens)
            .build()
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::Assembly(format!(
                    "Failed to build generation config: {}",
                    e
                )))
            })?;

        let request = GenerateContentRequest::builder()
            .model(self.model.clone())
            .contents(vec![Content::user(vec![part])])
            .system_instruction(
                self.system_instruction
                    .as_ref()
                    .map(|text| Content::system(text.clone())),
            )
            .generation_config(Some(config))
            .build()
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::Assembly(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        Ok(request)
    }

    fn payload_part(&self, payload: &Payload) -> ArcimboldoResult<Part> {
        match payload {
            Payload::Text(text) => Ok(Part::text(text.as_str())),
            Payload::Image { mime, source } => {
                let mime = mime
                    .clone()
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                match source {
                    MediaSource::Base64(data) => Ok(Part::inline(mime, data.clone())),
                    MediaSource::Binary(bytes) => Ok(Part::inline(mime, STANDARD.encode(bytes))),
                    MediaSource::Url(url) => Err(ExtractionError::new(
                        ExtractionErrorKind::Payload(format!(
                            "URL media must be resolved through a ByteSource before assembly: {}",
                            url
                        )),
                    )
                    .into()),
                }
            }
        }
    }
}
