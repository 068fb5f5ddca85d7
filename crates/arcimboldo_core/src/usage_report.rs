//! Usage reports for completed extraction calls.

use crate::TokenUsageData;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration and cost accounting for one extraction call.
///
/// Costs are in USD. The wall-clock duration comes from caller-supplied
/// timestamps; no clock is read inside the accounting path.
///
/// # Examples
///
/// ```
/// use arcimboldo_core::{TokenUsageData, UsageReport};
/// use std::time::Duration;
///
/// let report = UsageReport::builder()
///     .model("gemini-2.0-flash".to_string())
///     .usage(TokenUsageData::new(1000, 200, 1200))
///     .duration(Duration::from_millis(840))
///     .input_cost(0.0001)
///     .output_cost(0.00008)
///     .build()
///     .expect("valid report");
///
/// assert!((report.total_cost() - 0.00018).abs() < 1e-12);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UsageReport {
    /// Model identifier the call was billed against.
    model: String,
    /// Token counts as reported by the backend.
    usage: TokenUsageData,
    /// Wall-clock duration of the call.
    duration: Duration,
    /// Cost of the prompt tokens, USD.
    input_cost: f64,
    /// Cost of the generated tokens, USD.
    output_cost: f64,
}

impl UsageReport {
    /// Creates a builder for UsageReport.
    pub fn builder() -> UsageReportBuilder {
        UsageReportBuilder::default()
    }

    /// Combined input and output cost, USD.
    pub fn total_cost(&self) -> f64 {
        self.input_cost + self.output_cost
    }
}
