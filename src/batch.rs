//! Driver: dispatch per attack model and evaluate whole budget x time tables.
//!
//! Every (primitive, budget, time-index) triple is independent, so the batch
//! fans out across worker threads with no coordination beyond collecting the
//! results. One failing triple never aborts the batch: unavailable price data
//! becomes an explicit empty cell, modeling warnings and infeasibility are
//! outcomes inside the cell.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::prices::{PricePoint, SeriesKind, TechnologyPrices};
use crate::profile::{AttackModel, PrimitiveProfile};
use crate::types::{AttackEstimate, Budget};
use crate::{collision_search, exhaustive_search, isogeny_search};

/// Estimate one (primitive, budget, technology-point) triple.
///
/// Pure and referentially transparent: identical inputs give bit-identical
/// outputs.
pub fn estimate_point(
    profile: &PrimitiveProfile,
    budget: Budget,
    prices: PricePoint,
) -> AttackEstimate {
    match profile.attack() {
        AttackModel::ExhaustiveKeySearch(params) => {
            exhaustive_search::estimate(profile, params, budget, prices)
        }
        AttackModel::ParallelCollisionSearch(params) => {
            collision_search::estimate(profile, params, budget, prices)
        }
        AttackModel::IsogenyWalkSearch(params) => {
            isogeny_search::estimate(profile, params, budget, prices)
        }
    }
}

/// Estimate one triple against an oracle index, propagating `DataUnavailable`.
pub fn estimate_at(
    profile: &PrimitiveProfile,
    budget: Budget,
    prices: &TechnologyPrices,
    index: usize,
) -> Result<AttackEstimate> {
    let point = prices.price_at(index)?;
    Ok(estimate_point(profile, budget, point))
}

/// One primitive's results: budget-scenario rows by time-index columns.
///
/// `None` cells mark indices where the price record is unavailable; consumers
/// must render them as absent, never as zero.
#[derive(Clone, Debug, Serialize)]
pub struct EstimateTable {
    pub primitive: String,
    pub series_kind: SeriesKind,
    pub budgets: Vec<Budget>,
    pub cells: Vec<Vec<Option<AttackEstimate>>>,
}

impl EstimateTable {
    pub fn get(&self, budget_index: usize, time_index: usize) -> Option<&AttackEstimate> {
        self.cells.get(budget_index)?.get(time_index)?.as_ref()
    }

    pub fn time_indices(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}

/// Evaluate the full table for one primitive, in parallel over budget rows.
pub fn estimate_table(
    profile: &PrimitiveProfile,
    budgets: &[Budget],
    prices: &TechnologyPrices,
) -> EstimateTable {
    let cells = budgets
        .par_iter()
        .map(|&budget| {
            (0..prices.len())
                .map(|index| match prices.price_at(index) {
                    Ok(point) => {
                        let estimate = estimate_point(profile, budget, point);
                        if estimate == AttackEstimate::MemoryNotNegligible {
                            warn!(
                                primitive = profile.name(),
                                index,
                                budget_dollars = budget.as_dollars(),
                                "memory is not negligible, closed form does not apply"
                            );
                        }
                        Some(estimate)
                    }
                    Err(err) => {
                        debug!(
                            primitive = profile.name(),
                            index,
                            %err,
                            "skipping index without price data"
                        );
                        None
                    }
                })
                .collect()
        })
        .collect();

    EstimateTable {
        primitive: profile.name().to_string(),
        series_kind: prices.kind(),
        budgets: budgets.to_vec(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::prices::{PriceSeries, TechnologyPrices};
    use crate::types::standard_budgets;
    use crate::{catalog, projection};

    #[test]
    fn test_aes128_table_is_fully_populated() {
        let prices = dataset::historical_prices().unwrap();
        let budgets = standard_budgets();
        let table = estimate_table(&catalog::aes128().unwrap(), &budgets, &prices);

        assert_eq!(table.cells.len(), 7);
        assert_eq!(table.time_indices(), dataset::YEARS);
        for row in &table.cells {
            for cell in row {
                assert!(cell.as_ref().expect("record covers every year").is_feasible());
            }
        }
    }

    #[test]
    fn test_years_shrink_down_budget_rows() {
        let prices = dataset::historical_prices().unwrap();
        let budgets = standard_budgets();
        for profile in [
            catalog::aes256().unwrap(),
            catalog::sha3_256(74).unwrap(),
            catalog::sikep434().unwrap(),
        ] {
            let table = estimate_table(&profile, &budgets, &prices);
            for t in 0..table.time_indices() {
                for b in 1..budgets.len() {
                    let poorer = table.get(b - 1, t).unwrap().log2_years().unwrap();
                    let richer = table.get(b, t).unwrap().log2_years().unwrap();
                    assert!(
                        richer <= poorer,
                        "{}: budget row {b} at index {t}",
                        profile.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_years_shrink_along_projected_suffix() {
        // The extrapolated periods are strictly cheaper each step, so attack
        // years must be non-increasing along them. (The raw historical record
        // bounces year to year and carries no such guarantee.)
        let prices = projection::projected_prices().unwrap();
        let budget = [Budget::dollars(1e9)];
        for profile in [catalog::sha3_384(77).unwrap(), catalog::sikep751().unwrap()] {
            let table = estimate_table(&profile, &budget, &prices);
            for period in 4..8 {
                let earlier = table.get(0, period).unwrap().log2_years().unwrap();
                let later = table.get(0, period + 1).unwrap().log2_years().unwrap();
                assert!(later <= earlier, "{}: period {period}", profile.name());
            }
        }
    }

    #[test]
    fn test_missing_price_data_yields_empty_cells() {
        // Storage series with a hole at index 1.
        let storage = PriceSeries::new(
            "storage",
            crate::prices::SeriesKind::Historical,
            vec![Some(1e11), None, Some(4e11)],
        )
        .unwrap();
        let logic = PriceSeries::new(
            "logic",
            crate::prices::SeriesKind::Historical,
            vec![Some(1e7), Some(2e7), Some(4e7)],
        )
        .unwrap();
        let prices = TechnologyPrices::new(storage, logic).unwrap();

        let table = estimate_table(
            &catalog::sikep434().unwrap(),
            &[Budget::dollars(1e9)],
            &prices,
        );
        assert!(table.get(0, 0).is_some());
        assert!(table.get(0, 1).is_none());
        assert!(table.get(0, 2).is_some());
    }

    #[test]
    fn test_projected_table_is_labeled_optimistic() {
        let prices = projection::projected_prices().unwrap();
        let table = estimate_table(
            &catalog::sikep751().unwrap(),
            &[Budget::millions(1.0)],
            &prices,
        );
        assert_eq!(table.series_kind, SeriesKind::ProjectedOptimistic);
        assert_eq!(table.time_indices(), 9);
    }

    #[test]
    fn test_table_serializes_with_explicit_gaps() {
        let storage = PriceSeries::new(
            "storage",
            crate::prices::SeriesKind::Historical,
            vec![Some(1e11), None],
        )
        .unwrap();
        let logic = PriceSeries::new(
            "logic",
            crate::prices::SeriesKind::Historical,
            vec![Some(1e7), Some(2e7)],
        )
        .unwrap();
        let prices = TechnologyPrices::new(storage, logic).unwrap();
        let table = estimate_table(
            &catalog::aes128().unwrap(),
            &[Budget::dollars(1e6)],
            &prices,
        );

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["primitive"], "AES-128");
        assert_eq!(json["series_kind"], "historical");
        assert_eq!(json["cells"][0][0]["status"], "feasible");
        assert!(json["cells"][0][1].is_null());
    }
}
