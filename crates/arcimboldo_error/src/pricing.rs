//! Pricing lookup error types.

/// Pricing error raised when a model has no rate table entry.
#[derive(Debug, Clone)]
pub struct PricingError {
    /// Model identifier that failed the lookup
    pub model: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PricingError {
    /// Create a new PricingError for the given model at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcimboldo_error::PricingError;
    ///
    /// let err = PricingError::new("gemini-9.9-imaginary");
    /// assert_eq!(err.model, "gemini-9.9-imaginary");
    /// ```
    #[track_caller]
    pub fn new(model: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            model: model.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pricing Error: no rate table entry for model '{}' at line {} in {}",
            self.model, self.line, self.file
        )
    }
}

impl std::error::Error for PricingError {}
