//! Round construction: option evaluation, verdicts, and the canonical set

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::simulation::{project, ValidationError};

use super::round::{canonical_templates, GameOption, Round, RoundTemplate};

/// Template configuration defects surfaced at round-construction time.
///
/// A malformed option is a broken template, not a bad investment, so it fails
/// loudly here instead of being ranked against the other option.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoundError {
    #[error("option {option_id} in round template {round_id} is invalid: {source}")]
    InvalidOption {
        round_id: String,
        option_id: String,
        #[source]
        source: ValidationError,
    },
    #[error("round template {round_id}: both options yield {return_pct}% real, no correct answer")]
    TiedOptions { round_id: String, return_pct: f64 },
}

/// Project an option and extract its real return in percent.
pub fn evaluate_option(option: &GameOption) -> Result<f64, ValidationError> {
    let result = project(&option.to_inputs())?;
    Ok(result.summary.real_return_pct)
}

/// Build a round from a template: evaluate both options, pick the strictly
/// better real return as the correct answer, and compose the explanation.
///
/// Equal real returns (after 2-decimal rounding) leave no defensible correct
/// answer and are rejected as a template defect.
pub fn build_round(template: &RoundTemplate) -> Result<Round, RoundError> {
    let mut evaluated = Vec::with_capacity(2);
    for option in &template.options {
        let return_pct =
            evaluate_option(option).map_err(|source| RoundError::InvalidOption {
                round_id: template.id.clone(),
                option_id: option.id.clone(),
                source,
            })?;
        debug!(
            "round {}: option {} yields {:.2}% real",
            template.id, option.id, return_pct
        );
        evaluated.push((option, return_pct));
    }

    if evaluated[0].1 == evaluated[1].1 {
        return Err(RoundError::TiedOptions {
            round_id: template.id.clone(),
            return_pct: evaluated[0].1,
        });
    }

    let (winner, winner_return) = if evaluated[0].1 > evaluated[1].1 {
        evaluated[0]
    } else {
        evaluated[1]
    };

    Ok(Round {
        id: template.id.clone(),
        options: template.options.clone(),
        correct_option_id: winner.id.clone(),
        explanation: explain(winner, winner_return),
    })
}

fn explain(winner: &GameOption, return_pct: f64) -> String {
    let mut factors = String::new();
    if winner.compounding_periods_per_year > 1 {
        factors.push_str("frequent compounding, ");
    }
    if winner.management_fee_annual_pct == 0.0 {
        factors.push_str("no fees, ");
    } else {
        factors.push_str(&format!("{}% fee, ", winner.management_fee_annual_pct));
    }
    format!(
        "The correct option yields {:.1}% in real terms. Key factors: {}nominal rate {}%.",
        return_pct, factors, winner.nominal_annual_rate_pct
    )
}

/// The canonical quiz content: the five fixed templates built in a fixed
/// order. Structurally identical on every call.
pub fn fixed_round_set() -> Result<Vec<Round>, RoundError> {
    canonical_templates().iter().map(build_round).collect()
}

/// Seeded template sampler for future randomized content. Same seed, same
/// round sequence.
#[derive(Debug, Clone)]
pub struct RoundSampler {
    rng: ChaCha8Rng,
}

impl RoundSampler {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a round from a randomly selected canonical template.
    pub fn sample(&mut self) -> Result<Round, RoundError> {
        let templates = canonical_templates();
        let index = self.rng.gen_range(0..templates.len());
        build_round(&templates[index])
    }
}
