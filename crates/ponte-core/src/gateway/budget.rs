//! Budget ceiling check for outbound completions.
//!
//! The gateway consults this guard before every provider call, refusing
//! requests whose estimated cost would push cumulative spend past the
//! configured ceiling.

/// Compares spend-plus-estimate against a USD ceiling.
///
/// A ceiling `<= 0.0` means unlimited and always allows.
#[derive(Debug, Clone, Copy)]
pub struct BudgetGuard {
    ceiling_usd: f64,
}

impl BudgetGuard {
    pub fn new(ceiling_usd: f64) -> Self {
        Self { ceiling_usd }
    }

    pub fn ceiling_usd(&self) -> f64 {
        self.ceiling_usd
    }

    pub fn is_unlimited(&self) -> bool {
        self.ceiling_usd <= 0.0
    }

    /// Whether a call with the given estimated cost may proceed.
    pub fn allows(&self, spent_usd: f64, estimated_cost_usd: f64) -> bool {
        if self.is_unlimited() {
            return true;
        }
        spent_usd + estimated_cost_usd <= self.ceiling_usd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_within_ceiling() {
        let guard = BudgetGuard::new(10.0);
        assert!(guard.allows(5.0, 1.0));
        assert!(guard.allows(9.0, 1.0)); // exactly at the ceiling
    }

    #[test]
    fn refuses_when_estimate_would_cross_ceiling() {
        let guard = BudgetGuard::new(1.0);
        assert!(!guard.allows(0.999999, 0.01));
    }

    #[test]
    fn zero_or_negative_ceiling_is_unlimited() {
        assert!(BudgetGuard::new(0.0).allows(1_000_000.0, 1_000.0));
        assert!(BudgetGuard::new(-5.0).allows(1_000_000.0, 1_000.0));
        assert!(BudgetGuard::new(0.0).is_unlimited());
    }
}
