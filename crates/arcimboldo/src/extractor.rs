//! Extraction orchestration.

use crate::accountant::UsageAccountant;
use crate::assemble::RequestAssembler;
use crate::config::ExtractorConfig;
use arcimboldo_core::{Payload, UsageReport};
use arcimboldo_error::{
    ArcimboldoResult, ExtractionError, ExtractionErrorKind, GeminiError, GeminiErrorKind,
};
use arcimboldo_models::{
    GeminiClient, GeminiConfig, GenerationService, PricingTable, StaticPricingTable,
};
use chrono::Utc;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// Result of one extraction call: the parsed structured data plus its
/// usage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Extraction {
    /// The structured data the model produced
    data: Value,
    /// Duration and cost accounting for the call
    report: UsageReport,
}

/// Drives one extraction end to end: assemble, generate, parse, account.
pub struct Extractor<G: GenerationService, P: PricingTable> {
    service: G,
    assembler: RequestAssembler,
    accountant: UsageAccountant<P>,
}

impl<G: GenerationService, P: PricingTable> Extractor<G, P> {
    /// Creates an extractor from its collaborators.
    pub fn new(service: G, assembler: RequestAssembler, pricing: P) -> Self {
        Self {
            service,
            assembler,
            accountant: UsageAccountant::new(pricing),
        }
    }

    /// Extracts structured data shaped by `schema` from `payload`.
    ///
    /// The payload must already carry inline media; resolve URL sources
    /// through a [`crate::ByteSource`] first. A reply that is not valid
    /// JSON surfaces as [`ExtractionErrorKind::ResponseFormat`] with no
    /// retry at this layer.
    #[instrument(skip(self, payload, schema), fields(model = %self.assembler.model()))]
    pub async fn extract(&self, payload: &Payload, schema: &Value) -> ArcimboldoResult<Extraction> {
        let started_at = Utc::now();

        let request = self.assembler.assemble(payload, schema)?;
        debug!("Assembled extraction request");

        let response = self.service.generate(&request).await.inspect_err(|e| {
            error!(error = %e, "Generation request failed");
        })?;

        let text = response
            .text()
            .ok_or_else(|| ExtractionError::new(ExtractionErrorKind::EmptyResponse))?;

        let data: Value = serde_json::from_str(&text).map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::ResponseFormat(e.to_string()))
        })?;

        let finished_at = Utc::now();
        let usage = response.usage();
        let report =
            self.accountant
                .report(self.assembler.model(), &usage, started_at, finished_at)?;

        info!(
            duration_ms = report.duration().as_millis() as u64,
            total_tokens = *usage.total_tokens(),
            "Extraction completed"
        );

        Ok(Extraction { data, report })
    }
}

impl Extractor<GeminiClient, StaticPricingTable> {
    /// Builds a Gemini-backed extractor from configuration and the
    /// `GEMINI_API_KEY` environment variable.
    pub fn from_config(config: &ExtractorConfig) -> ArcimboldoResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let mut gemini_config = GeminiConfig::builder();
        gemini_config.api_key(api_key);
        if let Some(endpoint) = config.endpoint() {
            gemini_config.endpoint(endpoint.clone());
        }
        let gemini_config = gemini_config.build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        let service = GeminiClient::new(gemini_config)?;

        let assembler = RequestAssembler::builder()
            .model(config.model().clone())
            .temperature(*config.temperature())
            .max_output_tokens(*config.max_output_tokens())
            .system_instruction(config.system_instruction().clone())
            .build()
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::Assembly(format!(
                    "Failed to build assembler: {}",
                    e
                )))
            })?;

        Ok(Self::new(service, assembler, StaticPricingTable::default()))
    }
}
