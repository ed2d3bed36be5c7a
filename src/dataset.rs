//! Empirical technology prices, calendar years 2000-2020 inclusive.
//!
//! Release cost and capacity tables for commodity storage (HDD, DRAM, SSD)
//! and for the Intel/AMD microprocessor with the lowest cost per transistor
//! each year. The tables are data, supplied at process start; everything the
//! estimators see goes through [`crate::prices::TechnologyPrices`].

use crate::error::Result;
use crate::prices::{PriceAdjustment, PriceSeries, TechnologyPrices};

/// Transistors per 2-NAND CMOS gate equivalent.
pub const TRANSISTORS_PER_GATE: f64 = 4.0;

/// First calendar year covered by the record; index 0 maps here.
pub const FIRST_YEAR: u32 = 2000;

/// Number of yearly entries (2000-2020).
pub const YEARS: usize = 21;

/// Release-to-production price factor estimated from 2020 transistor
/// production costs (Khan and Mann, 2020). Bulk buys track production cost
/// more closely than release prices do.
pub const BULK_PRICE_FACTOR: f64 = 7.40;

// Hard drive disk, release cost US$ and capacity in bytes.
const COST_HDD: [f64; YEARS] = [
    125.00, 259.00, 146.00, 89.99, 97.50, 130.00, 69.99, 99.99, 99.99, 69.99, 89.99, 54.99, 54.99,
    54.99, 104.99, 84.99, 221.63, 99.99, 93.49, 149.99, 129.99,
];
const BYTES_HDD: [f64; YEARS] = [
    3.07e10, 1e11, 1.2e11, 1.2e11, 1.6e11, 3.2e11, 3.2e11, 5.0e11, 1.0e12, 1.0e12, 2.0e12, 1.5e12,
    1.5e12, 1.5e12, 3.0e12, 3.0e12, 8.0e12, 4.0e12, 4.0e12, 8.0e12, 8.0e12,
];

// Dynamic RAM, release cost US$ and capacity in bytes.
const COST_DRAM: [f64; YEARS] = [
    89.00, 18.89, 34.19, 39.00, 39.00, 39.00, 148.99, 49.95, 39.99, 39.99, 39.99, 41.99, 29.99,
    29.99, 29.99, 29.99, 44.99, 44.99, 44.99, 44.99, 44.99,
];
const BYTES_DRAM: [f64; YEARS] = [
    1.31e8, 1.31e8, 2.62e8, 5.24e8, 5.24e8, 5.24e8, 20.97e8, 20.97e8, 41.94e8, 41.94e8, 41.94e8,
    83.89e8, 83.89e8, 83.89e8, 83.89e8, 83.89e8, 167.77e8, 167.77e8, 167.77e8, 167.77e8, 167.77e8,
];

// Solid state drive, release cost US$ and capacity in bytes. No retail SSD
// data before 2013.
const COST_SSD: [Option<f64>; YEARS] = [
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(159.99),
    Some(179.99),
    Some(59.99),
    Some(194.99),
    Some(194.99),
    Some(49.99),
    Some(75.99),
    Some(75.99),
];
const BYTES_SSD: [Option<f64>; YEARS] = [
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(2.56e11),
    Some(4.80e11),
    Some(2.40e11),
    Some(9.60e11),
    Some(9.60e11),
    Some(4.80e11),
    Some(9.60e11),
    Some(9.60e11),
];

// Intel and AMD MPU cost US$ and transistor counts, picking whichever vendor
// had the lowest cost per transistor that year.
const COST_MPU: [f64; YEARS] = [
    112.0, 64.0, 33.0, 33.0, 30.0, 30.0, 30.0, 30.0, 30.0, 30.0, 70.0, 79.0, 71.0, 71.0, 42.0,
    42.0, 58.0, 51.0, 51.0, 51.0, 60.0,
];
const TRANS_MPU: [f64; YEARS] = [
    28.1e6, 28.1e6, 55e6, 55e6, 125e6, 125e6, 125e6, 125e6, 125e6, 125e6, 382e6, 1178e6, 1303e6,
    1303e6, 1400e6, 1400e6, 3100e6, 3100e6, 3100e6, 3100e6, 4940e6,
];

fn full(values: &[f64; YEARS]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

/// HDD bytes per dollar; the storage series the estimators buy attack memory
/// from.
pub fn hdd_bytes_per_dollar(adjustment: PriceAdjustment) -> Result<PriceSeries> {
    PriceSeries::from_cost_capacity("HDD bytes/$", &full(&COST_HDD), &full(&BYTES_HDD), adjustment)
}

/// DRAM bytes per dollar.
pub fn dram_bytes_per_dollar(adjustment: PriceAdjustment) -> Result<PriceSeries> {
    PriceSeries::from_cost_capacity(
        "DRAM bytes/$",
        &full(&COST_DRAM),
        &full(&BYTES_DRAM),
        adjustment,
    )
}

/// SSD bytes per dollar; unavailable before 2013. Feeds the projection's
/// memory growth window.
pub fn ssd_bytes_per_dollar(adjustment: PriceAdjustment) -> Result<PriceSeries> {
    PriceSeries::from_cost_capacity("SSD bytes/$", &COST_SSD, &BYTES_SSD, adjustment)
}

/// MPU gate equivalents per dollar, at [`TRANSISTORS_PER_GATE`] transistors
/// per GE; the logic series the estimators buy engines from.
pub fn mpu_gates_per_dollar(adjustment: PriceAdjustment) -> Result<PriceSeries> {
    let gates: Vec<Option<f64>> = TRANS_MPU
        .iter()
        .map(|&t| Some(t / TRANSISTORS_PER_GATE))
        .collect();
    PriceSeries::from_cost_capacity("MPU GE/$", &full(&COST_MPU), &gates, adjustment)
}

/// The standard historical oracle of the study: bulk-adjusted HDD storage
/// paired with bulk-adjusted MPU logic, one entry per year 2000-2020.
pub fn historical_prices() -> Result<TechnologyPrices> {
    let adjustment = PriceAdjustment::bulk_discount(BULK_PRICE_FACTOR)?;
    TechnologyPrices::new(
        hdd_bytes_per_dollar(adjustment)?,
        mpu_gates_per_dollar(adjustment)?,
    )
}

/// Same pairing at unadjusted release prices, for side-by-side comparison.
pub fn historical_release_prices() -> Result<TechnologyPrices> {
    let adjustment = PriceAdjustment::release_prices();
    TechnologyPrices::new(
        hdd_bytes_per_dollar(adjustment)?,
        mpu_gates_per_dollar(adjustment)?,
    )
}
