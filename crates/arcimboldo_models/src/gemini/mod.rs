//! Gemini `generateContent` client.

mod dto;

pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentRequestBuilder,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, InlineData, Part,
    UsageMetadata,
};

use arcimboldo_error::{GeminiError, GeminiErrorKind, GeminiResult};
use async_trait::async_trait;
use derive_getters::Getters;

/// A structured generation capability.
///
/// The extraction shell is written against this trait so the backend can be
/// stubbed in tests.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Sends one structured generation request.
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse>;
}

/// Gemini API configuration.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    api_key: String,
    #[builder(default = "\"https://generativelanguage.googleapis.com\".to_string()")]
    endpoint: String,
}

impl GeminiConfig {
    /// Creates a builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

/// Gemini HTTP client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self { client, config })
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let config = GeminiConfig::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        Self::new(config)
    }

    /// Sends a generation request to the Gemini API.
    #[tracing::instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint(),
            request.model()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        GeminiClient::generate(self, request).await
    }
}
