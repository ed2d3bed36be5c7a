use serde::Serialize;

/// Seconds in a year, the time base shared by every attack-cost law.
pub const SECONDS_PER_YEAR: f64 = 3600.0 * 24.0 * 365.0;

/// Adversary budget in US dollars.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    pub fn dollars(amount: f64) -> Self {
        Self(amount)
    }

    pub fn millions(amount: f64) -> Self {
        Self(amount * 1e6)
    }

    pub fn as_dollars(&self) -> f64 {
        self.0
    }
}

/// The budget ladder enumerated by the study: $1M, $10M, ..., $1T.
pub fn standard_budgets() -> Vec<Budget> {
    [1e6, 10e6, 100e6, 1000e6, 10000e6, 100000e6, 1000000e6]
        .iter()
        .map(|&d| Budget::dollars(d))
        .collect()
}

/// Resource split selected by an estimator, all fields in log2 scale to stay
/// readable across the huge dynamic range of the results.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResourceAllocation {
    /// log2 of expected years until the attack succeeds
    pub log2_years: f64,
    /// log2 of memory consumed, in bytes
    pub log2_memory_bytes: f64,
    /// log2 of search engines allocated
    pub log2_engine_units: f64,
}

/// Outcome of one estimator call for a (primitive, budget, time-index) triple.
///
/// `MemoryNotNegligible` and `Infeasible` are expected, meaningful outcomes,
/// distinct from each other and from oracle errors; neither carries a numeric
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttackEstimate {
    /// The attack fits the budget; the minimizing allocation is attached.
    Feasible(ResourceAllocation),
    /// Closed-form engine-bound assumption violated: the I/O buffer memory is
    /// not cheap relative to the engines. A modeling warning, not a crash.
    MemoryNotNegligible,
    /// No grid point leaves a positive complementary resource under this
    /// budget and technology point.
    Infeasible,
}

impl AttackEstimate {
    pub fn is_feasible(&self) -> bool {
        matches!(self, AttackEstimate::Feasible(_))
    }

    pub fn allocation(&self) -> Option<&ResourceAllocation> {
        match self {
            AttackEstimate::Feasible(alloc) => Some(alloc),
            _ => None,
        }
    }

    pub fn log2_years(&self) -> Option<f64> {
        self.allocation().map(|a| a.log2_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_budgets_span_million_to_trillion() {
        let budgets = standard_budgets();
        assert_eq!(budgets.len(), 7);
        assert_eq!(budgets[0].as_dollars(), 1e6);
        assert_eq!(budgets[6].as_dollars(), 1e12);
        for pair in budgets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_infeasible_has_no_allocation() {
        assert!(AttackEstimate::Infeasible.allocation().is_none());
        assert!(AttackEstimate::MemoryNotNegligible.log2_years().is_none());
        assert!(!AttackEstimate::Infeasible.is_feasible());
    }
}
