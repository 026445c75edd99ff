//! Yield Engine - Compounding projection engine with a comparative-yield game
//!
//! This library provides:
//! - Rate conversions between nominal, effective annual, and monthly terms
//! - Month-by-month compounding projections with contributions and fees
//! - Inflation deflation into constant purchasing-power ("real") values
//! - A two-option "which yields more?" quiz built on the projection engine
//! - An append-only history of game outcomes and earned badges

pub mod game;
pub mod history;
pub mod simulation;

// Re-export commonly used types
pub use game::{GameOutcome, GameSession, Round, RoundSampler};
pub use history::{record_outcome, HistoryStore, MemoryStore};
pub use simulation::{project, RateMode, SimulationInputs, SimulationResult, Summary};
