//! Extraction pipeline error types.

/// Extraction-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtractionErrorKind {
    /// Model returned text that is not valid JSON
    ResponseFormat(String),
    /// Model returned no usable candidate text
    EmptyResponse,
    /// Payload could not be prepared for the request
    Payload(String),
    /// Request or report assembly failed
    Assembly(String),
}

impl std::fmt::Display for ExtractionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionErrorKind::ResponseFormat(msg) => {
                write!(f, "Model response is not valid JSON: {}", msg)
            }
            ExtractionErrorKind::EmptyResponse => {
                write!(f, "Model response contained no candidate text")
            }
            ExtractionErrorKind::Payload(msg) => {
                write!(f, "Payload preparation failed: {}", msg)
            }
            ExtractionErrorKind::Assembly(msg) => {
                write!(f, "Assembly failed: {}", msg)
            }
        }
    }
}

/// Extraction error with source location tracking.
///
/// A `ResponseFormat` kind is distinct from any normalizer concern: the
/// schema rewrite never fails, while a model reply that fails JSON parsing
/// propagates to the caller unrecovered.
///
/// # Examples
///
/// ```
/// use arcimboldo_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(ExtractionErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no candidate text"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionError {
    /// The kind of error that occurred
    pub kind: ExtractionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extraction Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ExtractionError {}
