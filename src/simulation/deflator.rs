//! Deflation of a nominal value series into constant month-0 purchasing power

use super::result::round2;

/// Convert a nominal series into a real (inflation-adjusted) series.
///
/// The deflator accumulates `(1 + inflation[m]/100)` for every month after
/// month 0, so the first entry is divided by exactly 1: month 0 is the
/// purchasing-power baseline. Entries are rounded to 2 decimals on output.
pub fn real_series(nominal: &[f64], monthly_inflation_pct: &[f64]) -> Vec<f64> {
    let mut deflator = 1.0;
    nominal
        .iter()
        .enumerate()
        .map(|(month, &value)| {
            if month > 0 {
                deflator *= 1.0 + monthly_inflation_pct[month] / 100.0;
            }
            round2(value / deflator)
        })
        .collect()
}
