//! Canonical example scenarios for demos and manual exploration

use super::inputs::{RateMode, SimulationInputs};

/// Moderate-inflation savings plan: 2% monthly inflation, 45% nominal rate.
pub fn low_inflation() -> SimulationInputs {
    SimulationInputs {
        initial_amount: 100_000.0,
        monthly_contribution: 10_000.0,
        nominal_annual_rate_pct: 45.0,
        compounding_periods_per_year: 12,
        monthly_inflation_pct: vec![2.0; 12],
        management_fee_annual_pct: 1.0,
        horizon_months: 12,
        rate_mode: RateMode::NominalAnnual,
    }
}

/// High-inflation environment: 5% monthly inflation against an 80% nominal rate.
pub fn medium_inflation() -> SimulationInputs {
    SimulationInputs {
        initial_amount: 100_000.0,
        monthly_contribution: 10_000.0,
        nominal_annual_rate_pct: 80.0,
        compounding_periods_per_year: 12,
        monthly_inflation_pct: vec![5.0; 12],
        management_fee_annual_pct: 1.5,
        horizon_months: 12,
        rate_mode: RateMode::NominalAnnual,
    }
}

/// Crisis scenario: 120% nominal rate with inflation spikes in months 3 and 7.
pub fn high_inflation_with_shock() -> SimulationInputs {
    SimulationInputs {
        initial_amount: 100_000.0,
        monthly_contribution: 15_000.0,
        nominal_annual_rate_pct: 120.0,
        compounding_periods_per_year: 12,
        monthly_inflation_pct: vec![
            8.0, 9.0, 7.0, 15.0, 12.0, 8.0, 9.0, 20.0, 10.0, 8.0, 9.0, 11.0,
        ],
        management_fee_annual_pct: 2.0,
        horizon_months: 12,
        rate_mode: RateMode::NominalAnnual,
    }
}
