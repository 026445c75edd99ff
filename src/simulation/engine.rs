//! Month-by-month compounding projection loop

use log::debug;

use super::deflator::real_series;
use super::inputs::{SimulationInputs, ValidationError, Violation};
use super::rates::{resolve_monthly_rate, NonPositiveCompounding};
use super::result::{round2, SimulationResult, Summary};

impl From<NonPositiveCompounding> for ValidationError {
    fn from(_: NonPositiveCompounding) -> Self {
        ValidationError {
            violations: vec![Violation::NonPositiveCompounding],
        }
    }
}

/// Run a full projection for the given inputs.
///
/// Pure function: validates up front (reporting every violated constraint),
/// allocates fresh series on each call, and never mutates shared state, so it
/// is safe to call concurrently.
///
/// Month 0 establishes the baseline: it holds only the initial amount (no
/// contribution) and records 0% cumulative inflation. Every later month adds
/// the contribution, applies the effective monthly rate, deducts the monthly
/// fee, and compounds the inflation deflator.
pub fn project(inputs: &SimulationInputs) -> Result<SimulationResult, ValidationError> {
    inputs.validate()?;

    let monthly_rate = resolve_monthly_rate(inputs)?;
    let monthly_fee_rate = inputs.management_fee_annual_pct / 100.0 / 12.0;
    debug!(
        "projecting {} months at monthly rate {:.6}, monthly fee rate {:.6}",
        inputs.horizon_months, monthly_rate, monthly_fee_rate
    );

    let horizon = inputs.horizon_months as usize;
    let mut nominal = Vec::with_capacity(horizon);
    let mut cumulative_contributions = Vec::with_capacity(horizon);
    let mut cumulative_inflation_pct = Vec::with_capacity(horizon);

    let mut portfolio = inputs.initial_amount;
    let mut contributions = inputs.initial_amount;
    let mut inflation_factor = 1.0;
    let mut fees_paid = 0.0;

    for month in 0..horizon {
        if month > 0 {
            portfolio += inputs.monthly_contribution;
            contributions += inputs.monthly_contribution;
        }

        portfolio *= 1.0 + monthly_rate;

        let fee = portfolio * monthly_fee_rate;
        portfolio -= fee;
        fees_paid += fee;

        if month > 0 {
            inflation_factor *= 1.0 + inputs.monthly_inflation_pct[month] / 100.0;
        }

        nominal.push(round2(portfolio));
        cumulative_contributions.push(round2(contributions));
        cumulative_inflation_pct.push(round2((inflation_factor - 1.0) * 100.0));
    }

    let real = real_series(&nominal, &inputs.monthly_inflation_pct);

    let final_nominal = nominal.last().copied().unwrap_or(0.0);
    let final_real = real.last().copied().unwrap_or(0.0);
    let nominal_return_pct = if contributions > 0.0 {
        round2((final_nominal / contributions - 1.0) * 100.0)
    } else {
        0.0
    };
    // Real return measures the purchasing power of the original principal;
    // with no principal the contributions are the only meaningful base.
    let real_return_pct = if inputs.initial_amount > 0.0 {
        round2((final_real / inputs.initial_amount - 1.0) * 100.0)
    } else if contributions > 0.0 {
        round2((final_real / contributions - 1.0) * 100.0)
    } else {
        0.0
    };

    Ok(SimulationResult {
        nominal,
        real,
        cumulative_inflation_pct,
        cumulative_contributions,
        summary: Summary {
            final_nominal: round2(final_nominal),
            final_real: round2(final_real),
            fees_paid: round2(fees_paid),
            nominal_return_pct,
            real_return_pct,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::inputs::RateMode;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn flat_inputs(
        initial: f64,
        contribution: f64,
        rate_pct: f64,
        periods: u32,
        fee_pct: f64,
        inflation_pct: f64,
        months: u32,
    ) -> SimulationInputs {
        SimulationInputs {
            initial_amount: initial,
            monthly_contribution: contribution,
            nominal_annual_rate_pct: rate_pct,
            compounding_periods_per_year: periods,
            monthly_inflation_pct: vec![inflation_pct; months as usize],
            management_fee_annual_pct: fee_pct,
            horizon_months: months,
            rate_mode: RateMode::NominalAnnual,
        }
    }

    #[test]
    fn rejects_invalid_inputs_before_computing() {
        let mut inputs = flat_inputs(100_000.0, 0.0, 50.0, 12, 0.0, 3.0, 12);
        inputs.initial_amount = -1.0;
        inputs.management_fee_annual_pct = -1.0;
        let err = project(&inputs).unwrap_err();
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn series_are_parallel_and_full_length() {
        let result = project(&flat_inputs(50_000.0, 5000.0, 40.0, 12, 1.0, 5.0, 24)).unwrap();
        assert_eq!(result.nominal.len(), 24);
        assert_eq!(result.real.len(), 24);
        assert_eq!(result.cumulative_inflation_pct.len(), 24);
        assert_eq!(result.cumulative_contributions.len(), 24);
    }

    #[test]
    fn month_zero_is_the_baseline() {
        let result = project(&flat_inputs(10_000.0, 1000.0, 0.0, 12, 0.0, 4.0, 3)).unwrap();
        // No contribution and no inflation compounding in month 0.
        assert_eq!(result.cumulative_contributions[0], 10_000.0);
        assert_eq!(result.cumulative_inflation_pct[0], 0.0);
        assert_eq!(result.nominal[0], 10_000.0);
        assert_eq!(result.real[0], 10_000.0);
        // Contributions start in month 1.
        assert_eq!(result.cumulative_contributions[1], 11_000.0);
        assert_abs_diff_eq!(result.cumulative_inflation_pct[1], 4.0, epsilon = 0.005);
    }

    #[test]
    fn annual_compounding_matches_monthly_loop() {
        // 50% nominal compounded once a year over 12 months is an effective
        // 50% year, so the twelve effective-monthly steps multiply back to
        // exactly 1.5x regardless of the 3% monthly inflation.
        let result = project(&flat_inputs(100_000.0, 0.0, 50.0, 1, 0.0, 3.0, 12)).unwrap();
        assert_abs_diff_eq!(result.summary.final_nominal, 150_000.0, epsilon = 0.05);

        let expected_real = 150_000.0 / 1.03f64.powi(11);
        assert_abs_diff_eq!(result.summary.final_real, expected_real, epsilon = 0.05);
        assert_abs_diff_eq!(result.summary.real_return_pct, 8.36, epsilon = 0.01);
    }

    #[test]
    fn pure_compounding_closed_form() {
        // Zero fee, zero inflation, zero contributions: the loop must equal
        // initial * (1 + monthly)^horizon, here exactly 1% per month.
        let result = project(&flat_inputs(10_000.0, 0.0, 12.0, 12, 0.0, 0.0, 24)).unwrap();
        let expected = 10_000.0 * 1.01f64.powi(24);
        assert_abs_diff_eq!(result.summary.final_nominal, expected, epsilon = 0.05);
        assert_eq!(result.summary.fees_paid, 0.0);
    }

    #[test]
    fn final_real_matches_deflated_final_nominal() {
        let result = project(&flat_inputs(100_000.0, 15_000.0, 120.0, 12, 2.0, 8.0, 12)).unwrap();
        let final_factor = 1.0 + result.cumulative_inflation_pct.last().unwrap() / 100.0;
        let deflated = result.summary.final_nominal / final_factor;
        // The published cumulative inflation is rounded to 2 decimals, so
        // allow for that quantization.
        let tolerance = (result.summary.final_nominal * 1e-4).max(0.02);
        assert_abs_diff_eq!(result.summary.final_real, deflated, epsilon = tolerance);
    }

    #[test]
    fn fees_reduce_the_final_value() {
        let with_fee = project(&flat_inputs(100_000.0, 0.0, 60.0, 12, 2.0, 4.0, 12)).unwrap();
        let without_fee = project(&flat_inputs(100_000.0, 0.0, 60.0, 12, 0.0, 4.0, 12)).unwrap();
        assert!(with_fee.summary.final_nominal < without_fee.summary.final_nominal);
        assert!(with_fee.summary.fees_paid > 0.0);
        assert_eq!(without_fee.summary.fees_paid, 0.0);
    }

    #[test]
    fn nominal_return_is_relative_to_everything_put_in() {
        let result = project(&flat_inputs(100_000.0, 10_000.0, 0.0, 12, 0.0, 0.0, 12)).unwrap();
        // Zero rate: final value equals contributions, so 0% nominal return.
        assert_eq!(result.summary.nominal_return_pct, 0.0);
        assert_eq!(*result.cumulative_contributions.last().unwrap(), 210_000.0);
    }

    #[test]
    fn degenerate_zero_money_in_yields_zero_returns() {
        let result = project(&flat_inputs(0.0, 0.0, 50.0, 12, 0.0, 3.0, 12)).unwrap();
        assert_eq!(result.summary.final_nominal, 0.0);
        assert_eq!(result.summary.nominal_return_pct, 0.0);
        assert_eq!(result.summary.real_return_pct, 0.0);
    }

    proptest! {
        #[test]
        fn zero_inflation_means_real_equals_nominal(
            initial in 0.0f64..1_000_000.0,
            contribution in 0.0f64..50_000.0,
            rate in 0.0f64..150.0,
            months in 1u32..60,
        ) {
            let inputs = flat_inputs(initial, contribution, rate, 12, 0.0, 0.0, months);
            let result = project(&inputs).unwrap();
            prop_assert_eq!(result.real, result.nominal);
        }

        #[test]
        fn real_series_is_consistent_with_final_deflation(
            initial in 1000.0f64..500_000.0,
            rate in 0.0f64..120.0,
            inflation in 0.0f64..15.0,
            months in 1u32..48,
        ) {
            let inputs = flat_inputs(initial, 0.0, rate, 12, 0.0, inflation, months);
            let result = project(&inputs).unwrap();
            let factor = (1.0 + inflation / 100.0).powi(months as i32 - 1);
            let deflated = result.summary.final_nominal / factor;
            let tolerance = (result.summary.final_nominal * 1e-6).max(0.02);
            prop_assert!((result.summary.final_real - deflated).abs() <= tolerance);
        }
    }
}
