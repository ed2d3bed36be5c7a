//! Bounded logarithmic grid shared by the optimizing estimators.
//!
//! 900 points spanning 2^10 to 2^100 at decile log resolution. The span is
//! wide enough to bound any realistic allocation, and an exhaustive sweep
//! stays numerically stable where root-finding on a law with a hard
//! feasibility cliff is not.

/// Grid bounds in tenths of a bit.
const MIN_TENTHS: u32 = 100;
const MAX_TENTHS: u32 = 1000;

/// Exponents 10.0, 10.1, ..., 99.9, derived from integers so every sweep
/// sees bit-identical values.
fn exponents() -> impl Iterator<Item = f64> {
    (MIN_TENTHS..MAX_TENTHS).map(|tenths| f64::from(tenths) / 10.0)
}

/// Sweep the grid and keep the point with minimal log2-years.
///
/// `eval` returns `None` for infeasible points. Improvement is strict, so at
/// equal minimal years the first-found point wins, i.e. the smallest swept
/// exponent; the sweep is reproducible bit for bit.
pub(crate) fn minimize<T>(mut eval: impl FnMut(f64) -> Option<(f64, T)>) -> Option<T> {
    let mut best: Option<(f64, T)> = None;
    for exponent in exponents() {
        if let Some((log2_years, payload)) = eval(exponent) {
            let improves = match &best {
                Some((current, _)) => log2_years < *current,
                None => true,
            };
            if improves {
                best = Some((log2_years, payload));
            }
        }
    }
    best.map(|(_, payload)| payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_900_points() {
        assert_eq!(exponents().count(), 900);
        let first = exponents().next().unwrap();
        let last = exponents().last().unwrap();
        assert_eq!(first, 10.0);
        assert_eq!(last, 99.9);
    }

    #[test]
    fn test_minimize_skips_infeasible_points() {
        let result = minimize(|exp| if exp < 50.0 { None } else { Some((-exp, exp)) });
        assert_eq!(result, Some(99.9));
    }

    #[test]
    fn test_minimize_all_infeasible_is_none() {
        assert_eq!(minimize::<f64>(|_| None), None);
    }

    #[test]
    fn test_ties_keep_first_found() {
        // Flat objective: every feasible point scores the same.
        let result = minimize(|exp| Some((42.0, exp)));
        assert_eq!(result, Some(10.0));
    }
}
