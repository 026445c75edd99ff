//! Game session state machine: round progression, scoring, and outcome

use std::time::Instant;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::generator::{fixed_round_set, RoundError};
use super::round::Round;

/// Session protocol violations. These are caller errors: retrying the same
/// call will fail again until the call itself is corrected.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("session has not been started")]
    NotStarted,
    #[error("session is already in progress")]
    SessionInProgress,
    #[error("session is finished; start again to keep playing")]
    SessionTerminal,
    #[error("round {0} is not the current round")]
    UnknownRound(String),
    #[error("the current round has already been answered")]
    RoundAlreadyAnswered,
    #[error("the current round has not been answered yet")]
    RoundNotAnswered,
    #[error(transparent)]
    Template(#[from] RoundError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Immediate feedback for an answered round.
#[derive(Debug, Clone)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
}

/// Read-only result of a completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub rounds: Vec<Round>,
    /// Accuracy percentage plus the speed bonus.
    pub score: u32,
    pub correct_count: u32,
    pub total_rounds: u32,
    pub elapsed_seconds: u64,
    pub completed_at: DateTime<Utc>,
}

/// Accuracy-weighted score with a speed bonus that floors at zero: a slow
/// session earns no bonus but is never penalized below its accuracy.
fn score_for(correct_count: u32, total_rounds: u32, elapsed_seconds: u64) -> u32 {
    let accuracy = if total_rounds == 0 {
        0.0
    } else {
        correct_count as f64 / total_rounds as f64 * 100.0
    };
    let speed_bonus = (100i64 - elapsed_seconds as i64).max(0) as f64;
    (accuracy + speed_bonus).round() as u32
}

/// One quiz playthrough over the fixed round set.
///
/// Not designed for concurrent mutation; callers serialize `answer`, `advance`
/// and `finish` per instance. Answering does not advance the round: feedback
/// is shown first, then the caller advances explicitly.
#[derive(Debug)]
pub struct GameSession {
    state: SessionState,
    rounds: Vec<Round>,
    current_round_index: usize,
    current_round_answered: bool,
    correct_count: u32,
    started_at: Option<Instant>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::NotStarted,
            rounds: Vec::new(),
            current_round_index: 0,
            current_round_answered: false,
            correct_count: 0,
            started_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// The round awaiting an answer, if any rounds remain.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.current_round_index)
    }

    /// Begin (or restart) a session, rebuilding the fixed round set and
    /// resetting all progress. Restarting a session that is still in progress
    /// is a protocol error.
    pub fn start(&mut self) -> Result<&[Round], GameError> {
        if self.state == SessionState::InProgress {
            return Err(GameError::SessionInProgress);
        }
        self.rounds = fixed_round_set()?;
        self.current_round_index = 0;
        self.current_round_answered = false;
        self.correct_count = 0;
        self.started_at = Some(Instant::now());
        self.state = SessionState::InProgress;
        info!("game session started with {} rounds", self.rounds.len());
        Ok(&self.rounds)
    }

    /// Score an answer for the current round. Does not advance; each round
    /// accepts exactly one answer.
    pub fn answer(&mut self, round_id: &str, option_id: &str) -> Result<AnswerFeedback, GameError> {
        match self.state {
            SessionState::NotStarted => return Err(GameError::NotStarted),
            SessionState::Completed => return Err(GameError::SessionTerminal),
            SessionState::InProgress => {}
        }

        let round = self
            .current_round()
            .filter(|round| round.id == round_id)
            .ok_or_else(|| GameError::UnknownRound(round_id.to_string()))?;
        if self.current_round_answered {
            return Err(GameError::RoundAlreadyAnswered);
        }

        let correct = option_id == round.correct_option_id;
        let explanation = round.explanation.clone();
        if correct {
            self.correct_count += 1;
        }
        self.current_round_answered = true;

        Ok(AnswerFeedback {
            correct,
            explanation,
        })
    }

    /// Move on to the next round after the current one was answered.
    pub fn advance(&mut self) -> Result<(), GameError> {
        match self.state {
            SessionState::NotStarted => return Err(GameError::NotStarted),
            SessionState::Completed => return Err(GameError::SessionTerminal),
            SessionState::InProgress => {}
        }
        if !self.current_round_answered {
            return Err(GameError::RoundNotAnswered);
        }
        self.current_round_index += 1;
        self.current_round_answered = false;
        Ok(())
    }

    /// Close the session and compute the outcome. A finished session rejects
    /// every further call; the score is never recomputed.
    pub fn finish(&mut self) -> Result<GameOutcome, GameError> {
        match self.state {
            SessionState::NotStarted => return Err(GameError::NotStarted),
            SessionState::Completed => return Err(GameError::SessionTerminal),
            SessionState::InProgress => {}
        }

        let elapsed_seconds = self
            .started_at
            .map(|at| at.elapsed().as_secs_f64().round() as u64)
            .unwrap_or(0);
        let total_rounds = self.rounds.len() as u32;
        let score = score_for(self.correct_count, total_rounds, elapsed_seconds);
        self.state = SessionState::Completed;
        info!(
            "game session finished: {}/{} correct, score {}",
            self.correct_count, total_rounds, score
        );

        Ok(GameOutcome {
            rounds: self.rounds.clone(),
            score,
            correct_count: self.correct_count,
            total_rounds,
            elapsed_seconds,
            completed_at: Utc::now(),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
