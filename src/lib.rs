//! Budget-based attack-cost estimation against AES, SHA-3 and SIKE.
//!
//! Converts (adversary budget, technology-cost point, primitive profile) into
//! the minimum feasible attack time, jointly optimizing how the budget is
//! split between search engines and memory. Exhaustive key search is closed
//! form; distinguished-point collision search and isogeny-walk
//! meet-in-the-middle search run a bounded logarithmic grid search over the
//! engine/memory split. Prices come from the empirical 2000-2020 record in
//! [`dataset`], or from its labeled-optimistic extension in [`projection`].
//!
//! All estimates are pure functions of their inputs; batches parallelize
//! freely per (primitive, budget, time-index) triple.

pub mod batch;
pub mod catalog;
mod collision_search;
pub mod dataset;
pub mod error;
mod exhaustive_search;
mod grid;
mod isogeny_search;
pub mod prices;
pub mod profile;
pub mod projection;
pub mod types;

pub use batch::{estimate_at, estimate_point, estimate_table, EstimateTable};
pub use error::{CostModelError, Result};
pub use prices::{PriceAdjustment, PricePoint, PriceSeries, SeriesKind, TechnologyPrices};
pub use profile::{
    AttackModel, CollisionParams, ExhaustiveParams, IsogenyParams, PrimitiveProfile,
};
pub use projection::GrowthRate;
pub use types::{
    standard_budgets, AttackEstimate, Budget, ResourceAllocation, SECONDS_PER_YEAR,
};
