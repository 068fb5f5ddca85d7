//! Error types for the Arcimboldo structured extraction library.
//!
//! This crate provides the foundation error types used throughout the
//! Arcimboldo workspace.

mod config;
mod extraction;
mod gemini;
mod http;
mod pricing;

pub use config::ConfigError;
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult, RetryableError};
pub use http::HttpError;
pub use pricing::PricingError;

/// Crate-level error variants.
///
/// Every failure surfaced by an Arcimboldo crate converts into one of
/// these kinds on its way to the caller.
#[derive(Debug, derive_more::From)]
pub enum ArcimboldoErrorKind {
    /// HTTP error
    Http(HttpError),
    /// Configuration error
    Config(ConfigError),
    /// Gemini backend error
    Gemini(GeminiError),
    /// Pricing lookup error
    Pricing(PricingError),
    /// Extraction pipeline error
    Extraction(ExtractionError),
}

impl std::fmt::Display for ArcimboldoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArcimboldoErrorKind::Http(e) => write!(f, "{}", e),
            ArcimboldoErrorKind::Config(e) => write!(f, "{}", e),
            ArcimboldoErrorKind::Gemini(e) => write!(f, "{}", e),
            ArcimboldoErrorKind::Pricing(e) => write!(f, "{}", e),
            ArcimboldoErrorKind::Extraction(e) => write!(f, "{}", e),
        }
    }
}

/// Arcimboldo error with kind discrimination.
#[derive(Debug)]
pub struct ArcimboldoError(Box<ArcimboldoErrorKind>);

impl ArcimboldoError {
    /// Create a new error from a kind.
    pub fn new(kind: ArcimboldoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ArcimboldoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ArcimboldoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Arcimboldo Error: {}", self.0)
    }
}

impl std::error::Error for ArcimboldoError {}

// Generic From implementation for any type that converts to ArcimboldoErrorKind
impl<T> From<T> for ArcimboldoError
where
    T: Into<ArcimboldoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Arcimboldo operations.
pub type ArcimboldoResult<T> = std::result::Result<T, ArcimboldoError>;
