//! Completion gateway: the single path for outbound LLM calls.
//!
//! Every call goes through the same sequence: acquire the rate limiter,
//! replay the conversation history plus the new user turn, check the
//! budget ceiling against an estimated cost, invoke the provider, then on
//! success record usage and append the exchange to history. A failed call
//! leaves both the ledger and the history untouched.

pub mod budget;
pub mod history;
pub mod ledger;
pub mod pricing;
pub mod ratelimit;

use ponte_types::config::{BotConfig, PricingOverride};
use ponte_types::llm::{CompletionRequest, LlmError, Message};

use crate::llm::LlmProvider;

use self::budget::BudgetGuard;
use self::history::ConversationBuffer;
use self::ledger::{UsageLedger, UsageSnapshot};
use self::pricing::PricingEntry;
use self::ratelimit::RateLimiter;

/// Errors from a single conversation turn.
///
/// Contained at the dispatch boundary: rendered as localized chat text,
/// never fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("budget ceiling reached: spent ${spent:.4} of ${ceiling:.2}")]
    BudgetExceeded { spent: f64, ceiling: f64 },

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Per-call usage attached to a successful exchange.
///
/// Carries this call's increments, not the cumulative totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
    pub cost_usd: f64,
}

/// Result of one successful conversation turn.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub text: String,
    pub usage: ExchangeUsage,
}

/// Settings the gateway needs from the configuration surface.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub max_requests_per_second: f64,
    pub budget_usd: f64,
    pub max_history_exchanges: usize,
    pub pricing_overrides: Vec<PricingOverride>,
}

impl GatewaySettings {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            model: config.provider.model.clone(),
            max_tokens: config.limits.max_tokens,
            temperature: config.provider.temperature,
            max_requests_per_second: config.provider.max_requests_per_second,
            budget_usd: config.limits.budget_usd,
            max_history_exchanges: config.limits.max_history_exchanges,
            pricing_overrides: config.pricing.clone(),
        }
    }
}

/// Orchestrates rate limiting, budget gating, completion calls, usage
/// accounting, and conversation history for one conversation thread.
///
/// Holds all mutable per-conversation state behind `&mut self`; the
/// dispatch loop drives it one update at a time, so no internal locking
/// is required.
pub struct ChatGateway<P> {
    provider: P,
    model: String,
    max_tokens: u32,
    temperature: f64,
    pricing: PricingEntry,
    ledger: UsageLedger,
    limiter: RateLimiter,
    budget: BudgetGuard,
    history: ConversationBuffer,
}

impl<P: LlmProvider> ChatGateway<P> {
    pub fn new(provider: P, settings: GatewaySettings) -> Self {
        // Pricing is resolved once at startup; an unknown model logs a
        // single warning and falls back to the default tier.
        let pricing = pricing::resolve(&settings.model, &settings.pricing_overrides);

        Self {
            provider,
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            pricing,
            ledger: UsageLedger::new(),
            limiter: RateLimiter::new(settings.max_requests_per_second),
            budget: BudgetGuard::new(settings.budget_usd),
            history: ConversationBuffer::new(settings.max_history_exchanges),
        }
    }

    /// Run one conversation turn.
    ///
    /// On success the returned [`Exchange`] carries the assistant text and
    /// this call's incremental usage. On failure nothing is recorded and
    /// the history is unchanged.
    pub async fn converse(&mut self, user_message: &str) -> Result<Exchange, GatewayError> {
        self.limiter.acquire().await;

        let mut messages = self.history.messages().to_vec();
        messages.push(Message::user(user_message));

        let estimated = estimate_request_cost(&messages, self.max_tokens, &self.pricing);
        let spent = self.ledger.total_cost();
        if !self.budget.allows(spent, estimated) {
            tracing::warn!(
                spent,
                estimated,
                ceiling = self.budget.ceiling_usd(),
                "refusing completion: budget ceiling reached"
            );
            return Err(GatewayError::BudgetExceeded {
                spent,
                ceiling: self.budget.ceiling_usd(),
            });
        }

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        };

        let response = self.provider.complete(&request).await?;

        let cost = self.ledger.record(
            response.usage.input_tokens,
            response.usage.output_tokens,
            &self.pricing,
        );
        self.history
            .push_exchange(user_message.to_string(), response.content.clone());

        tracing::info!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            cost_usd = cost,
            "completion succeeded"
        );

        Ok(Exchange {
            text: response.content,
            usage: ExchangeUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
                total_tokens: response.usage.total_tokens(),
                cost_usd: cost,
            },
        })
    }

    /// Clear the conversation history. The usage ledger is unaffected.
    pub fn reset_conversation(&mut self) {
        self.history.reset();
    }

    /// Cumulative usage since process start.
    pub fn usage(&self) -> UsageSnapshot {
        self.ledger.snapshot()
    }

    /// Retained conversation turns, oldest first.
    pub fn conversation(&self) -> &[Message] {
        self.history.messages()
    }
}

/// Estimate the cost of a request before sending it.
///
/// Input tokens are estimated at ~4 characters per token with a small
/// per-message overhead; output is assumed to use the full `max_tokens`
/// allowance, which makes the budget check conservative.
fn estimate_request_cost(messages: &[Message], max_tokens: u32, pricing: &PricingEntry) -> f64 {
    let mut total_chars: usize = 0;
    for message in messages {
        total_chars += message.content.len() + 10;
    }
    let estimated_input_tokens = (total_chars as f64 / 4.0).ceil();

    (estimated_input_tokens / 1000.0) * pricing.input_per_kilotoken
        + (f64::from(max_tokens) / 1000.0) * pricing.output_per_kilotoken
}
