//! Technology-cost oracle: per-dollar price series for storage and logic.
//!
//! Estimators consume prices through [`TechnologyPrices::price_at`] and treat
//! a missing entry as a hard per-index failure, never as zero.

use serde::Serialize;

use crate::error::{CostModelError, Result};

/// Whether a series records the empirical history or an idealized projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Historical,
    /// Extrapolated with a constant compound growth ratio. Deliberately
    /// optimistic about future price drops; outputs must say so.
    ProjectedOptimistic,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesKind::Historical => write!(f, "historical"),
            SeriesKind::ProjectedOptimistic => write!(f, "projected (optimistic)"),
        }
    }
}

/// Scaling applied when a series is built from release prices.
///
/// The study divides release prices by an estimated release-to-production
/// factor; keeping the factor on the series (instead of a module-wide toggle)
/// lets adjusted and unadjusted series coexist in one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceAdjustment {
    factor: f64,
}

impl PriceAdjustment {
    /// Use release prices as-is.
    pub fn release_prices() -> Self {
        Self { factor: 1.0 }
    }

    /// Divide prices by `factor`, i.e. multiply per-dollar capacity by it.
    pub fn bulk_discount(factor: f64) -> Result<Self> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(CostModelError::InvalidSeries(format!(
                "bulk discount factor must be positive and finite, got {factor}"
            )));
        }
        Ok(Self { factor })
    }

    fn apply(&self, per_dollar: f64) -> f64 {
        per_dollar * self.factor
    }
}

/// One scalar per-dollar capacity series (bytes/$ or GE/$), indexed by time.
///
/// `None` marks an index where the record has no value (e.g. a device class
/// that did not exist yet); present values are positive and finite.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceSeries {
    label: String,
    kind: SeriesKind,
    values: Vec<Option<f64>>,
}

impl PriceSeries {
    pub fn new(
        label: impl Into<String>,
        kind: SeriesKind,
        values: Vec<Option<f64>>,
    ) -> Result<Self> {
        let label = label.into();
        if values.is_empty() {
            return Err(CostModelError::InvalidSeries(format!(
                "series '{label}' has no entries"
            )));
        }
        for (index, value) in values.iter().enumerate() {
            if let Some(v) = value {
                if !(v.is_finite() && *v > 0.0) {
                    return Err(CostModelError::InvalidSeries(format!(
                        "series '{label}' has non-positive value {v} at index {index}"
                    )));
                }
            }
        }
        Ok(Self { label, kind, values })
    }

    /// Build from raw (cost, capacity) pairs, applying the price adjustment.
    /// `None` in either input marks the index unavailable.
    pub fn from_cost_capacity(
        label: impl Into<String>,
        costs: &[Option<f64>],
        capacities: &[Option<f64>],
        adjustment: PriceAdjustment,
    ) -> Result<Self> {
        let label = label.into();
        if costs.len() != capacities.len() {
            return Err(CostModelError::InvalidSeries(format!(
                "series '{label}': {} costs vs {} capacities",
                costs.len(),
                capacities.len()
            )));
        }
        let values = costs
            .iter()
            .zip(capacities)
            .map(|(cost, capacity)| match (cost, capacity) {
                (Some(c), Some(cap)) => Some(adjustment.apply(cap / c)),
                _ => None,
            })
            .collect();
        Self::new(label, SeriesKind::Historical, values)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-dollar value at `index`, failing with `DataUnavailable` when the
    /// record has no entry there.
    pub fn value_at(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .flatten()
            .ok_or(CostModelError::DataUnavailable { index })
    }

    pub(crate) fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// Prevailing prices at one technology point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    pub bytes_per_dollar: f64,
    pub gates_per_dollar: f64,
}

/// The oracle consumed by every estimator call: a storage series (bytes/$)
/// paired with a logic series (GE/$) over the same time axis. Read-only, and
/// safely shared by reference across concurrent callers.
#[derive(Clone, Debug, PartialEq)]
pub struct TechnologyPrices {
    storage: PriceSeries,
    logic: PriceSeries,
}

impl TechnologyPrices {
    pub fn new(storage: PriceSeries, logic: PriceSeries) -> Result<Self> {
        if storage.len() != logic.len() {
            return Err(CostModelError::InvalidSeries(format!(
                "storage series '{}' has {} entries, logic series '{}' has {}",
                storage.label(),
                storage.len(),
                logic.label(),
                logic.len()
            )));
        }
        if storage.kind() != logic.kind() {
            return Err(CostModelError::InvalidSeries(format!(
                "storage series is {}, logic series is {}",
                storage.kind(),
                logic.kind()
            )));
        }
        Ok(Self { storage, logic })
    }

    pub fn price_at(&self, index: usize) -> Result<PricePoint> {
        Ok(PricePoint {
            bytes_per_dollar: self.storage.value_at(index)?,
            gates_per_dollar: self.logic.value_at(index)?,
        })
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn kind(&self) -> SeriesKind {
        self.storage.kind()
    }

    pub fn storage(&self) -> &PriceSeries {
        &self.storage
    }

    pub fn logic(&self) -> &PriceSeries {
        &self.logic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<Option<f64>>) -> PriceSeries {
        PriceSeries::new("test", SeriesKind::Historical, values).unwrap()
    }

    #[test]
    fn test_value_at_gap_is_unavailable() {
        let s = series(vec![Some(1.0), None, Some(3.0)]);
        assert!(s.value_at(0).is_ok());
        assert!(matches!(
            s.value_at(1),
            Err(CostModelError::DataUnavailable { index: 1 })
        ));
        assert!(matches!(
            s.value_at(7),
            Err(CostModelError::DataUnavailable { index: 7 })
        ));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(PriceSeries::new("bad", SeriesKind::Historical, vec![Some(0.0)]).is_err());
        assert!(PriceSeries::new("bad", SeriesKind::Historical, vec![Some(-1.0)]).is_err());
        assert!(PriceSeries::new("bad", SeriesKind::Historical, vec![Some(f64::NAN)]).is_err());
        assert!(PriceSeries::new("bad", SeriesKind::Historical, vec![]).is_err());
    }

    #[test]
    fn test_bulk_discount_scales_per_dollar_values() {
        let adjusted = PriceSeries::from_cost_capacity(
            "hdd",
            &[Some(100.0)],
            &[Some(1e12)],
            PriceAdjustment::bulk_discount(2.0).unwrap(),
        )
        .unwrap();
        assert_eq!(adjusted.value_at(0).unwrap(), 2e10);

        let release = PriceSeries::from_cost_capacity(
            "hdd",
            &[Some(100.0)],
            &[Some(1e12)],
            PriceAdjustment::release_prices(),
        )
        .unwrap();
        assert_eq!(release.value_at(0).unwrap(), 1e10);
    }

    #[test]
    fn test_technology_prices_requires_matching_axes() {
        let storage = series(vec![Some(1.0), Some(2.0)]);
        let logic = series(vec![Some(1.0)]);
        assert!(TechnologyPrices::new(storage, logic).is_err());
    }

    #[test]
    fn test_price_point_requires_both_components() {
        let storage = series(vec![Some(1e10), None]);
        let logic = series(vec![Some(1e7), Some(2e7)]);
        let prices = TechnologyPrices::new(storage, logic).unwrap();
        assert!(prices.price_at(0).is_ok());
        assert!(matches!(
            prices.price_at(1),
            Err(CostModelError::DataUnavailable { index: 1 })
        ));
    }
}
