//! Projection output structures

use serde::{Deserialize, Serialize};

/// Round a monetary or percent figure to 2 decimals. Applied only when a
/// value is exposed in the output, never mid-computation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summary figures for a completed projection, all rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Portfolio value at the end of the horizon.
    pub final_nominal: f64,
    /// Final value deflated to month-0 purchasing power.
    pub final_real: f64,
    /// Total management fees deducted over the horizon.
    pub fees_paid: f64,
    /// Growth relative to everything put in (initial amount plus contributions).
    pub nominal_return_pct: f64,
    /// Growth of the original principal's purchasing power. The denominator is
    /// the initial amount, not cumulative contributions.
    pub real_return_pct: f64,
}

/// Immutable month-by-month projection output. The four series are parallel
/// and all have `horizon_months` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Nominal portfolio value at the end of each month.
    pub nominal: Vec<f64>,
    /// Inflation-adjusted portfolio value at the end of each month.
    pub real: Vec<f64>,
    /// Cumulative inflation in percent since month 0.
    pub cumulative_inflation_pct: Vec<f64>,
    /// Initial amount plus contributions made up to each month.
    pub cumulative_contributions: Vec<f64>,
    pub summary: Summary,
}
