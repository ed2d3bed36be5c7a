//! Optimizing estimator for distinguished-point parallel collision search.
//!
//! Engines and memory genuinely trade off: more engines shorten the walk
//! phase but eat budget that would otherwise buy trail storage. The sweep
//! runs over engine count; memory falls out of whatever budget remains.

use std::f64::consts::PI;

use crate::grid;
use crate::prices::PricePoint;
use crate::profile::{CollisionParams, PrimitiveProfile};
use crate::types::{AttackEstimate, Budget, ResourceAllocation, SECONDS_PER_YEAR};

/// Bytes per stored trail record: one full state, the distinguished endpoint
/// with its known-zero prefix dropped, and six bytes of bookkeeping.
fn unit_bytes(params: &CollisionParams) -> f64 {
    let state_bytes = f64::from(params.state_bits) / 8.0;
    let endpoint_bytes = state_bytes - (f64::from(params.distinguished_bits) / 8.0).floor();
    state_bytes + endpoint_bytes + 6.0
}

pub(crate) fn estimate(
    profile: &PrimitiveProfile,
    params: &CollisionParams,
    budget: Budget,
    prices: PricePoint,
) -> AttackEstimate {
    let space = f64::from(params.state_bits).exp2();
    let theta = (-f64::from(params.distinguished_bits)).exp2();
    let unit = unit_bytes(params);

    let best = grid::minimize(|exponent| {
        let engines = exponent.exp2();
        let engine_dollars = engines * profile.area_ge() / prices.gates_per_dollar;
        let memory_units =
            (budget.as_dollars() - engine_dollars) * prices.bytes_per_dollar / unit;
        if memory_units <= 0.0 {
            return None;
        }

        let seconds = ((PI * space / 2.0).sqrt() / engines
            + params.rendezvous_constant / theta)
            * profile.latency_secs();
        let log2_years = (seconds / SECONDS_PER_YEAR).log2();
        let allocation = ResourceAllocation {
            log2_years,
            log2_memory_bytes: (memory_units * unit).log2(),
            log2_engine_units: exponent,
        };
        Some((log2_years, allocation))
    });

    match best {
        Some(allocation) => AttackEstimate::Feasible(allocation),
        None => AttackEstimate::Infeasible,
    }
}
