//! Rate conversions between nominal annual, effective annual, and effective
//! monthly terms

use thiserror::Error;

use super::inputs::{RateMode, SimulationInputs};

/// Conversion failure for a non-positive compounding frequency.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("compounding periods per year must be positive")]
pub struct NonPositiveCompounding;

/// Convert a nominal annual rate (in percent) to an effective annual rate
/// (as a fraction) given the compounding frequency.
///
/// `(1 + pct/100/k)^k - 1`
pub fn nominal_annual_to_effective_annual(
    nominal_annual_pct: f64,
    periods_per_year: u32,
) -> Result<f64, NonPositiveCompounding> {
    if periods_per_year == 0 {
        return Err(NonPositiveCompounding);
    }
    let k = periods_per_year as f64;
    Ok((1.0 + nominal_annual_pct / 100.0 / k).powf(k) - 1.0)
}

/// Convert an effective annual rate to the equivalent effective monthly rate.
///
/// `(1 + ea)^(1/12) - 1`
pub fn effective_annual_to_effective_monthly(effective_annual: f64) -> f64 {
    (1.0 + effective_annual).powf(1.0 / 12.0) - 1.0
}

/// Resolve the effective monthly rate for a set of inputs, dispatching on the
/// rate mode. In `EffectiveAnnual` mode the supplied rate is already an annual
/// effective rate and skips the nominal conversion.
pub fn resolve_monthly_rate(inputs: &SimulationInputs) -> Result<f64, NonPositiveCompounding> {
    let effective_annual = match inputs.rate_mode {
        RateMode::NominalAnnual => nominal_annual_to_effective_annual(
            inputs.nominal_annual_rate_pct,
            inputs.compounding_periods_per_year,
        )?,
        RateMode::EffectiveAnnual => inputs.nominal_annual_rate_pct / 100.0,
    };
    Ok(effective_annual_to_effective_monthly(effective_annual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(rate_pct: f64, periods: u32, mode: RateMode) -> SimulationInputs {
        SimulationInputs {
            initial_amount: 100_000.0,
            monthly_contribution: 0.0,
            nominal_annual_rate_pct: rate_pct,
            compounding_periods_per_year: periods,
            monthly_inflation_pct: vec![0.0; 12],
            management_fee_annual_pct: 0.0,
            horizon_months: 12,
            rate_mode: mode,
        }
    }

    #[test]
    fn nominal_12_pct_monthly_compounding() {
        // 12% nominal compounded monthly: 1.01^12 - 1 = 12.6825% effective,
        // which resolves back to exactly 1% per month.
        let ea = nominal_annual_to_effective_annual(12.0, 12).unwrap();
        assert_relative_eq!(ea, 0.126825030131970, max_relative = 1e-12);

        let monthly = resolve_monthly_rate(&inputs(12.0, 12, RateMode::NominalAnnual)).unwrap();
        assert_relative_eq!(monthly, 0.01, max_relative = 1e-9);
    }

    #[test]
    fn annual_compounding_is_identity() {
        let ea = nominal_annual_to_effective_annual(50.0, 1).unwrap();
        assert_relative_eq!(ea, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn effective_annual_mode_skips_nominal_conversion() {
        let monthly = resolve_monthly_rate(&inputs(50.0, 1, RateMode::EffectiveAnnual)).unwrap();
        assert_relative_eq!(monthly, 1.5f64.powf(1.0 / 12.0) - 1.0, max_relative = 1e-12);

        // Compounding frequency must not matter in this mode.
        let with_other_k =
            resolve_monthly_rate(&inputs(50.0, 365, RateMode::EffectiveAnnual)).unwrap();
        assert_relative_eq!(monthly, with_other_k, max_relative = 1e-12);
    }

    #[test]
    fn zero_periods_is_an_error() {
        assert_eq!(
            nominal_annual_to_effective_annual(10.0, 0),
            Err(NonPositiveCompounding)
        );
    }

    #[test]
    fn zero_rate_resolves_to_zero() {
        let monthly = resolve_monthly_rate(&inputs(0.0, 12, RateMode::NominalAnnual)).unwrap();
        assert_relative_eq!(monthly, 0.0);
    }
}
