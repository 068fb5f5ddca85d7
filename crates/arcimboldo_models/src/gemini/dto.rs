//! Wire types for the Gemini `generateContent` REST API.

use arcimboldo_core::TokenUsageData;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content part: text or inline media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text part.
    Text {
        /// The text content
        text: String,
    },
    /// Inline media part (base64 payload).
    InlineData {
        /// The media content
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Creates an inline-data part from a MIME type and base64 payload.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// The text content, when this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

/// Base64-encoded media with its MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g., "image/png"
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// "user" or "model"; absent on system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// The content parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// Creates user-role content.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// Creates role-less content, used for system instructions.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// Generation parameters, including the structured-output constraint.
///
/// `response_schema` carries the normalized schema; `response_mime_type` is
/// `application/json` for structured extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type the model must answer with
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Response shape constraint in the restricted dialect
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Output token cap
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    /// Creates a builder for GenerationConfig.
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

/// One outbound `generateContent` request.
///
/// The model identifier addresses the endpoint path and is not part of the
/// serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Target model identifier
    #[serde(skip)]
    model: String,
    /// Conversation contents
    contents: Vec<Content>,
    /// Optional system instruction
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    /// Optional generation parameters
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Creates a builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token accounting as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_token_count: u64,
    /// Tokens across the candidates
    #[serde(default)]
    candidates_token_count: u64,
    /// Total billed tokens
    #[serde(default)]
    total_token_count: u64,
}

impl From<&UsageMetadata> for TokenUsageData {
    fn from(usage: &UsageMetadata) -> Self {
        let prompt = *usage.prompt_token_count();
        let candidates = *usage.candidates_token_count();
        let total = match *usage.total_token_count() {
            0 => prompt + candidates,
            reported => reported,
        };
        TokenUsageData::new(prompt, candidates, total)
    }
}

/// The `generateContent` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    candidates: Vec<Candidate>,
    /// Token accounting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage_metadata: Option<UsageMetadata>,
    /// Concrete model version that served the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any text was produced.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content().as_ref()?;
        let pieces: Vec<&str> = content.parts().iter().filter_map(Part::as_text).collect();
        if pieces.is_empty() {
            None
        } else {
            Some(pieces.concat())
        }
    }

    /// Token usage, zeroed when the backend omitted the metadata.
    pub fn usage(&self) -> TokenUsageData {
        self.usage_metadata
            .as_ref()
            .map(TokenUsageData::from)
            .unwrap_or(TokenUsageData::new(0, 0, 0))
    }
}
