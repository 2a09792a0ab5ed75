use thiserror::Error;

pub const FACTOR_MIN: u32 = 2;
pub const FACTOR_MAX: u32 = 12;

pub const MIN_ROUNDS: u32 = 5;
pub const MAX_ROUNDS: u32 = 20;
pub const DEFAULT_ROUNDS: u32 = 5;

/// Outcome of a single answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub is_correct: bool,
    pub expected: u32,
}

/// Final tally handed to the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub final_score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    RoundActive,
    Evaluated,
    GameEnded,
}

#[derive(Debug)]
pub struct QuizSession {
    pub left_factor: u32,
    pub right_factor: u32,
    pub target_rounds: u32,
    pub next_target_rounds: u32,
    pub rounds_played: u32,
    pub score: u32,
    pub input_buffer: String,
    pub phase: GamePhase,
    pub last_result: Option<RoundResult>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Drill,
    GameOver,
    QuitConfirm,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetRoundsError {
    #[error("round count {0} is outside 5..=20")]
    OutOfRange(u32),
}
