//! Process-lifetime usage ledger.
//!
//! Accumulates token counts and cost across every successful completion.
//! The ledger is never reset; a conversation reset clears history only.

use super::pricing::PricingEntry;

/// Read-only view of cumulative usage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UsageSnapshot {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
}

/// Running accumulator of token counts and spend.
///
/// Totals are monotonically non-decreasing. Cost is accumulated as raw
/// floating point; rounding happens only at display time.
#[derive(Debug, Default)]
pub struct UsageLedger {
    input_tokens: u64,
    output_tokens: u64,
    total_cost: f64,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completion's usage and return its incremental cost in USD.
    pub fn record(&mut self, input_tokens: u32, output_tokens: u32, pricing: &PricingEntry) -> f64 {
        let cost = (input_tokens as f64 / 1000.0) * pricing.input_per_kilotoken
            + (output_tokens as f64 / 1000.0) * pricing.output_per_kilotoken;

        self.input_tokens += u64::from(input_tokens);
        self.output_tokens += u64::from(output_tokens);
        self.total_cost += cost;

        cost
    }

    /// Cumulative spend in USD.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
            total_tokens: self.input_tokens + self.output_tokens,
            total_cost: self.total_cost,
        }
    }
}
