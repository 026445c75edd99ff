//! Append-only history of game outcomes and earned badges
//!
//! The store is an injected interface so the core never assumes a specific
//! storage medium; the in-memory implementation is the reference one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::GameOutcome;

/// Score at or above which the yield-master badge is earned.
pub const BADGE_SCORE_THRESHOLD: u32 = 80;

const YIELD_MASTER_BADGE_ID: &str = "yield-master";

/// A recorded game outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub score: u32,
    pub correct_count: u32,
    pub total_rounds: u32,
    pub elapsed_seconds: u64,
    pub completed_at: DateTime<Utc>,
}

impl From<&GameOutcome> for OutcomeRecord {
    fn from(outcome: &GameOutcome) -> Self {
        Self {
            score: outcome.score,
            correct_count: outcome.correct_count,
            total_rounds: outcome.total_rounds,
            elapsed_seconds: outcome.elapsed_seconds,
            completed_at: outcome.completed_at,
        }
    }
}

/// A badge unlocked by a game outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub earned_at: DateTime<Utc>,
    pub score: u32,
}

/// Append-only record store. Records are only ever appended, never mutated
/// in place.
pub trait HistoryStore {
    fn append_outcome(&mut self, record: OutcomeRecord);
    fn append_badge(&mut self, record: BadgeRecord);
    fn outcomes(&self) -> &[OutcomeRecord];
    fn badges(&self) -> &[BadgeRecord];
}

/// In-memory reference implementation of [`HistoryStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    outcomes: Vec<OutcomeRecord>,
    badges: Vec<BadgeRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn append_outcome(&mut self, record: OutcomeRecord) {
        self.outcomes.push(record);
    }

    fn append_badge(&mut self, record: BadgeRecord) {
        self.badges.push(record);
    }

    fn outcomes(&self) -> &[OutcomeRecord] {
        &self.outcomes
    }

    fn badges(&self) -> &[BadgeRecord] {
        &self.badges
    }
}

/// Persist a finished game and unlock the yield-master badge on a passing
/// score. The badge is earned at most once.
pub fn record_outcome(store: &mut dyn HistoryStore, outcome: &GameOutcome) {
    store.append_outcome(OutcomeRecord::from(outcome));

    let passed = outcome.score >= BADGE_SCORE_THRESHOLD;
    let already_earned = store
        .badges()
        .iter()
        .any(|badge| badge.id == YIELD_MASTER_BADGE_ID);
    if passed && !already_earned {
        store.append_badge(BadgeRecord {
            id: YIELD_MASTER_BADGE_ID.to_string(),
            name: "Yield Master".to_string(),
            description: format!(
                "Completed the which-yields-more challenge with a score of {BADGE_SCORE_THRESHOLD}+"
            ),
            earned_at: outcome.completed_at,
            score: outcome.score,
        });
    }
}
