//! Core data types for the Arcimboldo structured extraction library.
//!
//! This crate provides the foundation data types used across all Arcimboldo
//! interfaces: media sources, extraction payloads, and usage accounting.

mod media;
mod payload;
mod token_usage;
mod usage_report;

pub use media::MediaSource;
pub use payload::Payload;
pub use token_usage::TokenUsageData;
pub use usage_report::UsageReport;
