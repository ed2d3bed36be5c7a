//! Closed-form estimator for exhaustive key search.
//!
//! Brute force offers no memory/compute trade, so the whole budget goes into
//! engines and the only memory is each engine's fixed I/O buffer. No search,
//! O(1) per call.

use crate::prices::PricePoint;
use crate::profile::{ExhaustiveParams, PrimitiveProfile};
use crate::types::{AttackEstimate, Budget, ResourceAllocation};

/// The I/O buffer memory may cost at most this fraction of the engine spend;
/// beyond it the engine-bound assumption behind the closed form is violated.
const MEMORY_COST_FRACTION: f64 = 1.0 / 8.0;

pub(crate) fn estimate(
    profile: &PrimitiveProfile,
    params: &ExhaustiveParams,
    budget: Budget,
    prices: PricePoint,
) -> AttackEstimate {
    let engines = budget.as_dollars() * prices.gates_per_dollar / profile.area_ge();

    // Two input blocks and one output block per engine.
    let io_bytes = f64::from(params.key_bits) / 8.0;
    let memory_bytes = engines * 3.0 * io_bytes;

    let memory_dollars = memory_bytes / prices.bytes_per_dollar;
    let engine_dollars = engines * profile.area_ge() / prices.gates_per_dollar;
    if memory_dollars > engine_dollars * MEMORY_COST_FRACTION {
        return AttackEstimate::MemoryNotNegligible;
    }

    let log2_years =
        f64::from(params.key_bits) - engines.log2() - profile.ops_per_year().log2();
    AttackEstimate::Feasible(ResourceAllocation {
        log2_years,
        log2_memory_bytes: memory_bytes.log2(),
        log2_engine_units: engines.log2(),
    })
}
