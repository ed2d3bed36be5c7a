//! Optimizing estimator for isogeny-walk meet-in-the-middle key recovery.
//!
//! Dual of the collision sweep: stored walk endpoints are the scarce
//! resource, so the grid runs over memory and the engine count falls out of
//! whatever budget remains after buying it.

use crate::grid;
use crate::prices::PricePoint;
use crate::profile::{IsogenyParams, PrimitiveProfile};
use crate::types::{AttackEstimate, Budget, ResourceAllocation};

/// Bytes per stored walk record: two walk-space indices plus tag overhead.
fn unit_bytes(params: &IsogenyParams) -> f64 {
    ((2.0 * params.log2_space + 20f64.log2()) / 8.0).ceil()
}

pub(crate) fn estimate(
    profile: &PrimitiveProfile,
    params: &IsogenyParams,
    budget: Budget,
    prices: PricePoint,
) -> AttackEstimate {
    let space = params.log2_space.exp2();
    let unit = unit_bytes(params);
    let ops_per_year = profile.ops_per_year();

    let best = grid::minimize(|exponent| {
        let memory_bytes = exponent.exp2();
        let memory_units = memory_bytes / unit;
        let memory_dollars = memory_bytes / prices.bytes_per_dollar;
        let engines =
            (budget.as_dollars() - memory_dollars) * prices.gates_per_dollar / profile.area_ge();
        if engines <= 0.0 {
            return None;
        }

        let years = params.rendezvous_constant * (space.powi(3) / memory_units).sqrt()
            / (engines * ops_per_year);
        let log2_years = years.log2();
        let allocation = ResourceAllocation {
            log2_years,
            log2_memory_bytes: exponent,
            log2_engine_units: engines.log2(),
        };
        Some((log2_years, allocation))
    });

    match best {
        Some(allocation) => AttackEstimate::Feasible(allocation),
        None => AttackEstimate::Infeasible,
    }
}
