//! Model pricing for cost accounting.
//!
//! Provides a hardcoded pricing table for known Claude models with
//! exact-match user overrides from `config.toml`. Rates are expressed in
//! USD per 1K tokens, matching how Anthropic publishes them.

use ponte_types::config::PricingOverride;

/// Per-1K-token USD rates for one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingEntry {
    pub input_per_kilotoken: f64,
    pub output_per_kilotoken: f64,
}

/// Sonnet-tier rates, used when the configured model is unknown.
const DEFAULT_ENTRY: PricingEntry = PricingEntry {
    input_per_kilotoken: 0.003,
    output_per_kilotoken: 0.015,
};

/// Built-in pricing table, keyed by exact model identifier.
const PRICING_TABLE: &[(&str, PricingEntry)] = &[
    (
        "claude-3-opus-20240229",
        PricingEntry {
            input_per_kilotoken: 0.015,
            output_per_kilotoken: 0.075,
        },
    ),
    (
        "claude-3-sonnet-20240229",
        PricingEntry {
            input_per_kilotoken: 0.003,
            output_per_kilotoken: 0.015,
        },
    ),
    (
        "claude-3-haiku-20240307",
        PricingEntry {
            input_per_kilotoken: 0.00025,
            output_per_kilotoken: 0.00125,
        },
    ),
    (
        "claude-3-5-sonnet-20240620",
        PricingEntry {
            input_per_kilotoken: 0.003,
            output_per_kilotoken: 0.015,
        },
    ),
    (
        "claude-opus-4-20250514",
        PricingEntry {
            input_per_kilotoken: 0.015,
            output_per_kilotoken: 0.075,
        },
    ),
    (
        "claude-sonnet-4-20250514",
        PricingEntry {
            input_per_kilotoken: 0.003,
            output_per_kilotoken: 0.015,
        },
    ),
];

/// Resolve the pricing entry for a model.
///
/// Lookup order:
/// 1. Exact-match user overrides from `config.toml`
/// 2. Built-in pricing table (exact match)
/// 3. Sonnet-tier default, with a warning
///
/// Always returns a value; an unknown model is not an error.
pub fn resolve(model: &str, overrides: &[PricingOverride]) -> PricingEntry {
    for entry in overrides {
        if entry.model == model {
            return PricingEntry {
                input_per_kilotoken: entry.input_per_kilotoken,
                output_per_kilotoken: entry.output_per_kilotoken,
            };
        }
    }

    for (known_model, entry) in PRICING_TABLE {
        if *known_model == model {
            return *entry;
        }
    }

    tracing::warn!(model, "unknown model, falling back to default pricing");
    DEFAULT_ENTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_models_return_table_rates() {
        for (model, expected) in PRICING_TABLE {
            let entry = resolve(model, &[]);
            assert_eq!(
                entry, *expected,
                "model {model} resolved to the wrong entry"
            );
        }
    }

    #[test]
    fn resolve_unknown_model_returns_sonnet_default() {
        let entry = resolve("claude-nonexistent-99", &[]);
        assert!((entry.input_per_kilotoken - 0.003).abs() < f64::EPSILON);
        assert!((entry.output_per_kilotoken - 0.015).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_user_override_takes_priority() {
        let overrides = vec![PricingOverride {
            model: "claude-sonnet-4-20250514".to_string(),
            input_per_kilotoken: 0.001,
            output_per_kilotoken: 0.005,
        }];
        let entry = resolve("claude-sonnet-4-20250514", &overrides);
        assert!((entry.input_per_kilotoken - 0.001).abs() < f64::EPSILON);
        assert!((entry.output_per_kilotoken - 0.005).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_override_requires_exact_match() {
        let overrides = vec![PricingOverride {
            model: "claude-sonnet-4".to_string(),
            input_per_kilotoken: 0.001,
            output_per_kilotoken: 0.005,
        }];
        // Not a prefix match: the dated model id falls through to the table.
        let entry = resolve("claude-sonnet-4-20250514", &overrides);
        assert!((entry.input_per_kilotoken - 0.003).abs() < f64::EPSILON);
    }
}
