//! Backend collaborators for the Arcimboldo structured extraction library.
//!
//! Provides the Gemini `generateContent` client behind the
//! [`GenerationService`] trait, the request/response wire types, and the
//! [`PricingTable`] collaborator used for usage accounting.

mod gemini;
mod pricing;

pub use gemini::{
    Candidate, Content, GeminiClient, GeminiConfig, GenerateContentRequest,
    GenerateContentRequestBuilder, GenerateContentResponse, GenerationConfig,
    GenerationConfigBuilder, GenerationService, InlineData, Part, UsageMetadata,
};
pub use pricing::{CostDirection, ModelRate, PricingTable, StaticPricingTable};
