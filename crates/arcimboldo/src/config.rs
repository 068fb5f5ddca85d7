//! Extraction facade configuration.

use arcimboldo_error::{ArcimboldoResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a Gemini-backed extractor.
///
/// The API key never lives in configuration; it comes from the
/// `GEMINI_API_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ExtractorConfig {
    /// Model identifier
    model: String,
    /// API endpoint override
    #[serde(default)]
    #[builder(default)]
    endpoint: Option<String>,
    /// Sampling temperature
    #[serde(default)]
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token cap
    #[serde(default)]
    #[builder(default)]
    max_output_tokens: Option<u32>,
    /// System instruction prepended to every call
    #[serde(default)]
    #[builder(default)]
    system_instruction: Option<String>,
}

impl ExtractorConfig {
    /// Creates a builder for ExtractorConfig.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Load extractor configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> ArcimboldoResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }
}
