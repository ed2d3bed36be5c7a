//! Primitive profiles: reference hardware numbers plus the attack-cost law.
//!
//! Profiles are data, not behavior. Swapping reference implementation numbers
//! never requires estimator changes; malformed numbers are rejected once at
//! construction, not per estimate.

use serde::Serialize;

use crate::error::{CostModelError, Result};
use crate::types::SECONDS_PER_YEAR;

/// Exhaustive key search: space `2^key_bits`, no memory/compute trade.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExhaustiveParams {
    pub key_bits: u32,
}

/// Distinguished-point parallel collision search (van Oorschot-Wiener) over a
/// `2^state_bits` space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CollisionParams {
    pub state_bits: u32,
    /// Leading zero bits that make a trail endpoint distinguished; the point
    /// density is `θ = 2^-distinguished_bits`. Tunable per instance.
    pub distinguished_bits: u32,
    /// Rendezvous/storage trade constant of the cost law (2.5 in the study).
    pub rendezvous_constant: f64,
}

/// Meet-in-the-middle walk over a claimed isogeny path; cost scales as the
/// square root of the walk space cubed over memory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IsogenyParams {
    /// log2 of the walk space searched from each end.
    pub log2_space: f64,
    pub rendezvous_constant: f64,
}

/// Which published attack-cost law applies to a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AttackModel {
    ExhaustiveKeySearch(ExhaustiveParams),
    ParallelCollisionSearch(CollisionParams),
    IsogenyWalkSearch(IsogenyParams),
}

/// Walk-space exponent for a degree-`base^exponent` isogeny chain: the attack
/// meets in the middle of the chain, searching `base^((exponent-1)/2)` walks
/// for odd exponents and `base^(exponent/2 - 1)` for even ones.
pub fn isogeny_walk_log2_space(base: u32, exponent: u32) -> f64 {
    let half = if exponent % 2 == 1 {
        (exponent - 1) / 2
    } else {
        exponent / 2 - 1
    };
    f64::from(half) * f64::from(base).log2()
}

/// One primitive variant: identity, reference implementation area and
/// latency (normalized to a single hardware node), and the attack law.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimitiveProfile {
    name: String,
    area_ge: f64,
    latency_secs: f64,
    attack: AttackModel,
}

impl PrimitiveProfile {
    pub fn new(
        name: impl Into<String>,
        area_ge: f64,
        latency_secs: f64,
        attack: AttackModel,
    ) -> Result<Self> {
        let name = name.into();
        if !(area_ge.is_finite() && area_ge > 0.0) {
            return Err(CostModelError::InvalidProfile(format!(
                "{name}: area must be positive gate equivalents, got {area_ge}"
            )));
        }
        if !(latency_secs.is_finite() && latency_secs > 0.0) {
            return Err(CostModelError::InvalidProfile(format!(
                "{name}: latency must be positive seconds, got {latency_secs}"
            )));
        }
        match &attack {
            AttackModel::ExhaustiveKeySearch(params) => {
                if params.key_bits == 0 {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: key length must be positive"
                    )));
                }
            }
            AttackModel::ParallelCollisionSearch(params) => {
                if params.state_bits == 0 {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: state width must be positive"
                    )));
                }
                if params.distinguished_bits >= params.state_bits {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: {} distinguished bits do not fit a {}-bit state",
                        params.distinguished_bits, params.state_bits
                    )));
                }
                if !(params.rendezvous_constant.is_finite() && params.rendezvous_constant > 0.0) {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: rendezvous constant must be positive"
                    )));
                }
            }
            AttackModel::IsogenyWalkSearch(params) => {
                if !(params.log2_space.is_finite() && params.log2_space > 0.0) {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: walk space must be positive"
                    )));
                }
                if !(params.rendezvous_constant.is_finite() && params.rendezvous_constant > 0.0) {
                    return Err(CostModelError::InvalidProfile(format!(
                        "{name}: rendezvous constant must be positive"
                    )));
                }
            }
        }
        Ok(Self {
            name,
            area_ge,
            latency_secs,
            attack,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference implementation area in gate equivalents.
    pub fn area_ge(&self) -> f64 {
        self.area_ge
    }

    /// Reference operation latency in seconds.
    pub fn latency_secs(&self) -> f64 {
        self.latency_secs
    }

    pub fn attack(&self) -> &AttackModel {
        &self.attack
    }

    /// Operations per year per engine at the reference latency.
    pub fn ops_per_year(&self) -> f64 {
        SECONDS_PER_YEAR / self.latency_secs
    }

    /// log2 of the attack search space.
    pub fn log2_space(&self) -> f64 {
        match &self.attack {
            AttackModel::ExhaustiveKeySearch(params) => f64::from(params.key_bits),
            AttackModel::ParallelCollisionSearch(params) => f64::from(params.state_bits),
            AttackModel::IsogenyWalkSearch(params) => params.log2_space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_area_and_latency() {
        let attack = AttackModel::ExhaustiveKeySearch(ExhaustiveParams { key_bits: 128 });
        assert!(PrimitiveProfile::new("x", 0.0, 1e-9, attack).is_err());
        assert!(PrimitiveProfile::new("x", -5.0, 1e-9, attack).is_err());
        assert!(PrimitiveProfile::new("x", 1000.0, 0.0, attack).is_err());
        assert!(PrimitiveProfile::new("x", 1000.0, f64::NAN, attack).is_err());
        assert!(PrimitiveProfile::new("x", 1000.0, 1e-9, attack).is_ok());
    }

    #[test]
    fn test_rejects_distinguished_bits_wider_than_state() {
        let attack = AttackModel::ParallelCollisionSearch(CollisionParams {
            state_bits: 64,
            distinguished_bits: 64,
            rendezvous_constant: 2.5,
        });
        assert!(PrimitiveProfile::new("x", 1000.0, 1e-9, attack).is_err());
    }

    #[test]
    fn test_walk_space_degree_rule() {
        // Odd chain: half the walk, rounded down.
        assert_eq!(isogeny_walk_log2_space(2, 191), 95.0);
        assert_eq!(isogeny_walk_log2_space(2, 273), 136.0);
        // Even chain: one step short of half.
        assert_eq!(isogeny_walk_log2_space(2, 216), 107.0);
        assert_eq!(isogeny_walk_log2_space(2, 372), 185.0);
        // Base-3 chains scale by log2(3).
        let expected = 58.0 * 3f64.log2();
        assert!((isogeny_walk_log2_space(3, 117) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ops_per_year() {
        let attack = AttackModel::ExhaustiveKeySearch(ExhaustiveParams { key_bits: 128 });
        let profile = PrimitiveProfile::new("x", 1000.0, 1e-9, attack).unwrap();
        let relative = profile.ops_per_year() / (SECONDS_PER_YEAR * 1e9) - 1.0;
        assert!(relative.abs() < 1e-12);
    }
}
