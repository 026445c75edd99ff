//! Simulation input contract and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the projection horizon. Anything beyond this is almost
/// certainly a malformed or hostile input, not a real plan.
pub const MAX_HORIZON_MONTHS: u32 = 3600;

/// How the supplied annual rate should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateMode {
    /// Nominal annual rate; converted through the compounding frequency.
    NominalAnnual,
    /// Effective annual rate; used directly, compounding frequency is ignored.
    EffectiveAnnual,
}

/// Full set of assumptions for one projection run.
///
/// `monthly_inflation_pct` must have exactly `horizon_months` entries; a
/// mismatched series is rejected up front, never truncated or padded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Starting capital.
    pub initial_amount: f64,
    /// Contribution added at the start of every month after month 0.
    pub monthly_contribution: f64,
    /// Annual rate in percent, interpreted per `rate_mode`.
    pub nominal_annual_rate_pct: f64,
    /// Compounding periods per year (e.g. 12 for monthly).
    pub compounding_periods_per_year: u32,
    /// Monthly inflation in percent, one entry per projected month.
    pub monthly_inflation_pct: Vec<f64>,
    /// Annual management fee in percent of portfolio value.
    pub management_fee_annual_pct: f64,
    /// Number of months to project.
    pub horizon_months: u32,
    pub rate_mode: RateMode,
}

/// A single violated input constraint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("initial amount cannot be negative")]
    NegativeInitialAmount,
    #[error("monthly contribution cannot be negative")]
    NegativeMonthlyContribution,
    #[error("rate cannot be negative")]
    NegativeRate,
    #[error("compounding periods per year must be positive")]
    NonPositiveCompounding,
    #[error("management fee cannot be negative")]
    NegativeManagementFee,
    #[error("horizon must be positive")]
    NonPositiveHorizon,
    #[error("horizon of {months} months exceeds the supported maximum of {max}")]
    HorizonTooLong { months: u32, max: u32 },
    #[error("inflation series has {actual} entries but the horizon is {expected} months")]
    InflationSeriesLengthMismatch { expected: u32, actual: usize },
    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },
}

/// Input contract failure carrying every violated constraint, so a caller can
/// surface all problems at once instead of one at a time.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid simulation inputs: {}", .violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl SimulationInputs {
    /// Check every input constraint, collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        for (value, field) in [
            (self.initial_amount, "initial amount"),
            (self.monthly_contribution, "monthly contribution"),
            (self.nominal_annual_rate_pct, "rate"),
            (self.management_fee_annual_pct, "management fee"),
        ] {
            if !value.is_finite() {
                violations.push(Violation::NonFiniteInput { field });
            }
        }
        if self.monthly_inflation_pct.iter().any(|v| !v.is_finite()) {
            violations.push(Violation::NonFiniteInput {
                field: "inflation series",
            });
        }

        if self.initial_amount < 0.0 {
            violations.push(Violation::NegativeInitialAmount);
        }
        if self.monthly_contribution < 0.0 {
            violations.push(Violation::NegativeMonthlyContribution);
        }
        if self.nominal_annual_rate_pct < 0.0 {
            violations.push(Violation::NegativeRate);
        }
        if self.compounding_periods_per_year == 0 {
            violations.push(Violation::NonPositiveCompounding);
        }
        if self.management_fee_annual_pct < 0.0 {
            violations.push(Violation::NegativeManagementFee);
        }
        if self.horizon_months == 0 {
            violations.push(Violation::NonPositiveHorizon);
        } else if self.horizon_months > MAX_HORIZON_MONTHS {
            violations.push(Violation::HorizonTooLong {
                months: self.horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }
        if self.monthly_inflation_pct.len() != self.horizon_months as usize {
            violations.push(Violation::InflationSeriesLengthMismatch {
                expected: self.horizon_months,
                actual: self.monthly_inflation_pct.len(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
