//! Comparative-yield quiz game built on the projection engine

mod generator;
mod round;
mod session;

pub use generator::{build_round, evaluate_option, fixed_round_set, RoundError, RoundSampler};
pub use round::{canonical_templates, GameOption, Round, RoundTemplate};
pub use session::{AnswerFeedback, GameError, GameOutcome, GameSession, SessionState};
