//! Per-model token pricing.

use arcimboldo_error::PricingError;
use derive_getters::Getters;
use std::collections::HashMap;

/// Which side of the call is being billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CostDirection {
    /// Prompt tokens
    #[display("input")]
    Input,
    /// Generated tokens
    #[display("output")]
    Output,
}

/// USD rates per million tokens for one model.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct ModelRate {
    /// USD per million prompt tokens
    input_per_million: f64,
    /// USD per million generated tokens
    output_per_million: f64,
}

impl ModelRate {
    /// Creates a new rate pair.
    pub fn new(input_per_million: f64, output_per_million: f64) -> Self {
        Self {
            input_per_million,
            output_per_million,
        }
    }
}

/// Per-model per-direction cost lookup.
pub trait PricingTable: Send + Sync {
    /// Cost in USD for `tokens` tokens against `model` in `direction`.
    ///
    /// An unknown model is an error, never a silent zero.
    fn cost(
        &self,
        model: &str,
        direction: CostDirection,
        tokens: u64,
    ) -> Result<f64, PricingError>;
}

/// A fixed in-memory rate table.
///
/// # Examples
///
/// ```
/// use arcimboldo_models::{CostDirection, PricingTable, StaticPricingTable};
///
/// let table = StaticPricingTable::default();
/// let cost = table
///     .cost("gemini-2.0-flash", CostDirection::Input, 1_000_000)
///     .expect("known model");
/// assert!(cost > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct StaticPricingTable {
    rates: HashMap<String, ModelRate>,
}

impl StaticPricingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Adds or replaces a model's rates.
    pub fn insert(&mut self, model: impl Into<String>, rate: ModelRate) -> &mut Self {
        self.rates.insert(model.into(), rate);
        self
    }
}

impl Default for StaticPricingTable {
    /// Published Gemini rates, USD per million tokens.
    fn default() -> Self {
        let mut table = Self::new();
        table
            .insert("gemini-2.0-flash", ModelRate::new(0.10, 0.40))
            .insert("gemini-2.0-flash-lite", ModelRate::new(0.075, 0.30))
            .insert("gemini-2.5-flash", ModelRate::new(0.30, 2.50))
            .insert("gemini-2.5-pro", ModelRate::new(1.25, 10.00))
            .insert("gemini-1.5-flash", ModelRate::new(0.075, 0.30))
            .insert("gemini-1.5-pro", ModelRate::new(1.25, 5.00));
        table
    }
}

impl PricingTable for StaticPricingTable {
    fn cost(
        &self,
        model: &str,
        direction: CostDirection,
        tokens: u64,
    ) -> Result<f64, PricingError> {
        let rate = self
            .rates
            .get(model)
            .ok_or_else(|| PricingError::new(model))?;
        let per_million = match direction {
            CostDirection::Input => *rate.input_per_million(),
            CostDirection::Output => *rate.output_per_million(),
        };
        Ok(per_million * tokens as f64 / 1_000_000.0)
    }
}
