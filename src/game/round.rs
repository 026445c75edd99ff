//! Round and option definitions for the which-yields-more game

use serde::{Deserialize, Serialize};

use crate::simulation::{RateMode, SimulationInputs};

/// One of the two investment scenarios offered in a round.
///
/// The real return of an option is derived by projecting it, never stored
/// here as an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOption {
    pub id: String,
    /// Free-text description shown to the player.
    pub description: String,
    pub nominal_annual_rate_pct: f64,
    pub compounding_periods_per_year: u32,
    pub management_fee_annual_pct: f64,
    /// Flat expected monthly inflation for the option's horizon.
    pub expected_monthly_inflation_pct: f64,
    pub horizon_months: u32,
    pub monthly_contribution: f64,
    pub initial_amount: f64,
}

impl GameOption {
    /// Expand the option into full projection inputs with a flat inflation
    /// series covering its horizon.
    pub fn to_inputs(&self) -> SimulationInputs {
        SimulationInputs {
            initial_amount: self.initial_amount,
            monthly_contribution: self.monthly_contribution,
            nominal_annual_rate_pct: self.nominal_annual_rate_pct,
            compounding_periods_per_year: self.compounding_periods_per_year,
            monthly_inflation_pct: vec![
                self.expected_monthly_inflation_pct;
                self.horizon_months as usize
            ],
            management_fee_annual_pct: self.management_fee_annual_pct,
            horizon_months: self.horizon_months,
            rate_mode: RateMode::NominalAnnual,
        }
    }
}

/// A two-option comparison challenge. `correct_option_id` is derived once at
/// construction time and never recomputed, so it always agrees with the
/// explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub options: [GameOption; 2],
    pub correct_option_id: String,
    pub explanation: String,
}

/// Authoring-time template for a round: two options without a verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTemplate {
    pub id: String,
    pub options: [GameOption; 2],
}

fn option(
    id: &str,
    description: &str,
    rate_pct: f64,
    periods: u32,
    fee_pct: f64,
    inflation_pct: f64,
    months: u32,
    contribution: f64,
    initial: f64,
) -> GameOption {
    GameOption {
        id: id.to_string(),
        description: description.to_string(),
        nominal_annual_rate_pct: rate_pct,
        compounding_periods_per_year: periods,
        management_fee_annual_pct: fee_pct,
        expected_monthly_inflation_pct: inflation_pct,
        horizon_months: months,
        monthly_contribution: contribution,
        initial_amount: initial,
    }
}

/// The five canonical round templates, in quiz order: compounding frequency,
/// fee impact, contribution strategy, horizon length, and risk/fee tradeoff.
pub fn canonical_templates() -> Vec<RoundTemplate> {
    vec![
        RoundTemplate {
            id: "r1_rate_frequency".to_string(),
            options: [
                option(
                    "opt1",
                    "Term deposit, 50% nominal annual rate",
                    50.0, 1, 0.0, 3.0, 12, 0.0, 100_000.0,
                ),
                option(
                    "opt2",
                    "Fund, 48% nominal with monthly compounding",
                    48.0, 12, 0.0, 3.0, 12, 0.0, 100_000.0,
                ),
            ],
        },
        RoundTemplate {
            id: "r2_fees".to_string(),
            options: [
                option(
                    "opt1",
                    "Fund A: 65% nominal, 0.5% fee",
                    65.0, 12, 0.5, 4.0, 12, 0.0, 100_000.0,
                ),
                option(
                    "opt2",
                    "Fund B: 60% nominal, no fee",
                    60.0, 12, 0.0, 4.0, 12, 0.0, 100_000.0,
                ),
            ],
        },
        RoundTemplate {
            id: "r3_contributions".to_string(),
            options: [
                option(
                    "opt1",
                    "Lump sum $200k, 55% nominal",
                    55.0, 12, 1.0, 4.0, 6, 0.0, 200_000.0,
                ),
                option(
                    "opt2",
                    "$100k upfront plus $15k/month, 50% nominal",
                    50.0, 12, 1.0, 4.0, 6, 15_000.0, 100_000.0,
                ),
            ],
        },
        RoundTemplate {
            id: "r4_horizons".to_string(),
            options: [
                option(
                    "opt1",
                    "Short term: 70% nominal over 3 months",
                    70.0, 12, 0.5, 6.0, 3, 0.0, 100_000.0,
                ),
                option(
                    "opt2",
                    "Long term: 45% nominal over 18 months",
                    45.0, 12, 0.5, 3.0, 18, 0.0, 100_000.0,
                ),
            ],
        },
        RoundTemplate {
            id: "r5_risk_tradeoff".to_string(),
            options: [
                option(
                    "opt1",
                    "Conservative: 40% nominal, no fee",
                    40.0, 12, 0.0, 5.0, 12, 5000.0, 50_000.0,
                ),
                option(
                    "opt2",
                    "Aggressive: 85% nominal, 2% fee",
                    85.0, 12, 2.0, 5.0, 12, 5000.0, 50_000.0,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_templates_have_stable_ids() {
        let ids: Vec<String> = canonical_templates().into_iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "r1_rate_frequency",
                "r2_fees",
                "r3_contributions",
                "r4_horizons",
                "r5_risk_tradeoff",
            ]
        );
    }

    #[test]
    fn option_expands_to_full_inflation_series() {
        let template = &canonical_templates()[3];
        let inputs = template.options[1].to_inputs();
        assert_eq!(inputs.horizon_months, 18);
        assert_eq!(inputs.monthly_inflation_pct, vec![3.0; 18]);
        assert!(inputs.validate().is_ok());
    }
}
