//! Schema-constrained structured extraction over restricted-dialect backends.
//!
//! Arcimboldo extracts typed JSON from text or images by calling a
//! structured-output generation backend. The backend accepts only a fragment
//! of OpenAPI 3.0 schema semantics, so every user-supplied schema first
//! passes through the dialect rewrite in [`arcimboldo_schema`]; the facade
//! then assembles the request, issues it, parses the reply, and accounts
//! token cost and wall-clock duration.
//!
//! One extraction runs strictly: acquire payload, normalize schema, issue
//! request, await response, compute usage. Failures from the backend
//! propagate unchanged; the facade adds logging at call boundaries but no
//! recovery.

mod accountant;
mod assemble;
mod bytes;
mod config;
mod extractor;
mod observability;

pub use accountant::UsageAccountant;
pub use assemble::RequestAssembler;
pub use bytes::{ByteSource, FileByteSource, HttpByteSource, ResolvedBytes, resolve_payload};
pub use config::ExtractorConfig;
pub use extractor::{Extraction, Extractor};
pub use observability::init_tracing;

pub use arcimboldo_core::{MediaSource, Payload, TokenUsageData, UsageReport};
pub use arcimboldo_error::{
    ArcimboldoError, ArcimboldoErrorKind, ArcimboldoResult, ConfigError, ExtractionError,
    ExtractionErrorKind, GeminiError, GeminiErrorKind, GeminiResult, PricingError,
    RetryableError,
};
pub use arcimboldo_models::{
    Content, CostDirection, GeminiClient, GeminiConfig, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, GenerationService, ModelRate, Part, PricingTable,
    StaticPricingTable,
};
pub use arcimboldo_schema::{SchemaMap, SchemaNode, normalize, normalize_value};
