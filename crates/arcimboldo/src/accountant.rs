//! Duration and cost accounting for completed calls.

use arcimboldo_core::{TokenUsageData, UsageReport};
use arcimboldo_error::{ArcimboldoResult, ExtractionError, ExtractionErrorKind};
use arcimboldo_models::{CostDirection, PricingTable};
use chrono::{DateTime, Utc};

/// Computes a [`UsageReport`] from backend token counts and caller-supplied
/// timestamps.
///
/// Purely arithmetic: no clock is read and no I/O happens here.
#[derive(Debug, Clone)]
pub struct UsageAccountant<P: PricingTable> {
    pricing: P,
}

impl<P: PricingTable> UsageAccountant<P> {
    /// Creates an accountant over the given pricing table.
    pub fn new(pricing: P) -> Self {
        Self { pricing }
    }

    /// Prices one completed call.
    pub fn report(
        &self,
        model: &str,
        usage: &TokenUsageData,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> ArcimboldoResult<UsageReport> {
        let duration = (finished_at - started_at).to_std().unwrap_or_default();

        let input_cost = self
            .pricing
            .cost(model, CostDirection::Input, *usage.input_tokens())?;
        let output_cost = self
            .pricing
            .cost(model, CostDirection::Output, *usage.output_tokens())?;

        UsageReport::builder()
            .model(model)
            .usage(*usage)
            .duration(duration)
            .input_cost(input_cost)
            .output_cost(output_cost)
            .build()
            .map_err(|e| {
                ExtractionError::new(ExtractionErrorKind::Assembly(format!(
                    "Failed to build usage report: {}",
                    e
                )))
                .into()
            })
    }
}
