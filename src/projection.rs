//! Geometric extrapolation of price series beyond the historical record.
//!
//! The extender assumes a constant per-period growth ratio taken from a fixed
//! trailing window of the history. That produces a strictly monotonic,
//! idealized trend; the resulting series is labeled
//! [`SeriesKind::ProjectedOptimistic`] and estimators run against it
//! unchanged.

use crate::dataset;
use crate::error::{CostModelError, Result};
use crate::prices::{PriceAdjustment, PriceSeries, SeriesKind, TechnologyPrices};

/// Years per projected period in the study grid (2000, 2005, ..., 2040).
pub const PERIOD_YEARS: usize = 5;

/// Projected periods appended past the historical boundary (2025-2040).
pub const PROJECTED_PERIODS: usize = 4;

/// Per-period compound growth ratio of a per-dollar series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthRate(f64);

impl GrowthRate {
    pub fn new(ratio: f64) -> Result<Self> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CostModelError::InvalidSeries(format!(
                "growth ratio must be positive and finite, got {ratio}"
            )));
        }
        Ok(Self(ratio))
    }

    /// Ratio `value[last] / value[last - step]` over the series' trailing
    /// window. Both endpoints must be available; the window is fixed at
    /// build time, so a gap here is a construction error.
    pub fn from_trailing_window(series: &PriceSeries, step: usize) -> Result<Self> {
        let last = series.len().checked_sub(1).ok_or_else(|| {
            CostModelError::InvalidSeries(format!("series '{}' is empty", series.label()))
        })?;
        if step == 0 || step > last {
            return Err(CostModelError::InvalidSeries(format!(
                "trailing window step {step} does not fit series '{}' of length {}",
                series.label(),
                series.len()
            )));
        }
        let newest = series.value_at(last).map_err(|_| {
            CostModelError::InvalidSeries(format!(
                "series '{}' has no value at the window end (index {last})",
                series.label()
            ))
        })?;
        let oldest = series.value_at(last - step).map_err(|_| {
            CostModelError::InvalidSeries(format!(
                "series '{}' has no value at the window start (index {})",
                series.label(),
                last - step
            ))
        })?;
        Self::new(newest / oldest)
    }

    pub fn ratio(&self) -> f64 {
        self.0
    }
}

/// Downsample `base` every `stride` indices and append `extra_periods`
/// geometrically extrapolated entries: period `k` past the boundary holds
/// `value[last] * ratio^k`.
///
/// The last base index must land on the sampling grid so the projection
/// continues exactly from the newest observation.
pub fn extend_series(
    base: &PriceSeries,
    rate: GrowthRate,
    stride: usize,
    extra_periods: usize,
) -> Result<PriceSeries> {
    let last = base.len().checked_sub(1).ok_or_else(|| {
        CostModelError::InvalidSeries(format!("series '{}' is empty", base.label()))
    })?;
    if stride == 0 || last % stride != 0 {
        return Err(CostModelError::InvalidSeries(format!(
            "stride {stride} does not land on the last index {last} of series '{}'",
            base.label()
        )));
    }

    let mut values: Vec<Option<f64>> = base
        .values()
        .iter()
        .step_by(stride)
        .copied()
        .collect();
    let newest = base.value_at(last).map_err(|_| {
        CostModelError::InvalidSeries(format!(
            "series '{}' has no value at its boundary (index {last})",
            base.label()
        ))
    })?;
    for k in 1..=extra_periods {
        values.push(Some(newest * rate.ratio().powi(k as i32)));
    }

    PriceSeries::new(
        format!("{} (projected)", base.label()),
        SeriesKind::ProjectedOptimistic,
        values,
    )
}

/// The study's projected oracle: five-year periods 2000-2040, nine entries.
/// Historical entries are sampled from the bulk-adjusted record; the suffix
/// grows at the 2015-2020 rate, memory taken from the SSD series and logic
/// from the MPU series.
pub fn projected_prices() -> Result<TechnologyPrices> {
    let adjustment = PriceAdjustment::bulk_discount(dataset::BULK_PRICE_FACTOR)?;
    let memory_rate =
        GrowthRate::from_trailing_window(&dataset::ssd_bytes_per_dollar(adjustment)?, PERIOD_YEARS)?;
    let logic_rate =
        GrowthRate::from_trailing_window(&dataset::mpu_gates_per_dollar(adjustment)?, PERIOD_YEARS)?;

    let storage = extend_series(
        &dataset::hdd_bytes_per_dollar(adjustment)?,
        memory_rate,
        PERIOD_YEARS,
        PROJECTED_PERIODS,
    )?;
    let logic = extend_series(
        &dataset::mpu_gates_per_dollar(adjustment)?,
        logic_rate,
        PERIOD_YEARS,
        PROJECTED_PERIODS,
    )?;
    TechnologyPrices::new(storage, logic)
}
