use crate::logger;
use crate::models::{
    AppState, GamePhase, GameSummary, QuizSession, RoundResult, TargetRoundsError, FACTOR_MAX,
    FACTOR_MIN, MAX_ROUNDS, MIN_ROUNDS,
};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

impl QuizSession {
    pub fn new(target_rounds: u32) -> Self {
        let rounds = target_rounds.clamp(MIN_ROUNDS, MAX_ROUNDS);
        QuizSession {
            left_factor: 0,
            right_factor: 0,
            target_rounds: rounds,
            next_target_rounds: rounds,
            rounds_played: 0,
            score: 0,
            input_buffer: String::new(),
            phase: GamePhase::Idle,
            last_result: None,
        }
    }

    /// Draws a fresh factor pair and opens the next round.
    pub fn start_round(&mut self) {
        let mut rng = rand::thread_rng();
        self.left_factor = rng.gen_range(FACTOR_MIN..=FACTOR_MAX);
        self.right_factor = rng.gen_range(FACTOR_MIN..=FACTOR_MAX);
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.last_result = None;
        self.phase = GamePhase::RoundActive;
    }

    pub fn expected(&self) -> u32 {
        self.left_factor * self.right_factor
    }

    /// Evaluates the raw answer text against the current factor pair.
    ///
    /// Unparsable input is an ordinary wrong answer, not an error.
    pub fn submit_answer(&mut self, raw: &str) -> RoundResult {
        let expected = self.expected();
        let is_correct = raw
            .trim()
            .parse::<i64>()
            .map(|answer| answer == i64::from(expected))
            .unwrap_or(false);
        if is_correct {
            self.score += 1;
        }
        let result = RoundResult {
            is_correct,
            expected,
        };
        self.last_result = Some(result);
        self.phase = GamePhase::Evaluated;
        result
    }

    pub fn is_game_ended(&self) -> bool {
        self.rounds_played == self.target_rounds
    }

    /// Acknowledges the round feedback: either the next round starts, or the
    /// game is over and the final tally is returned.
    pub fn advance(&mut self) -> Option<GameSummary> {
        if self.is_game_ended() {
            self.phase = GamePhase::GameEnded;
            Some(GameSummary {
                final_score: self.score,
            })
        } else {
            self.start_round();
            None
        }
    }

    /// Begins a new game with the score discarded.
    pub fn restart(&mut self) {
        self.score = 0;
        self.begin_game();
    }

    /// Begins a new game, carrying the score forward.
    pub fn continue_with_score(&mut self) {
        self.begin_game();
    }

    fn begin_game(&mut self) {
        self.rounds_played = 0;
        self.target_rounds = self.next_target_rounds;
        self.start_round();
    }

    /// Sets the round count for the next game. The current game keeps its
    /// length regardless.
    pub fn set_target_rounds(&mut self, rounds: u32) -> Result<(), TargetRoundsError> {
        if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
            return Err(TargetRoundsError::OutOfRange(rounds));
        }
        self.next_target_rounds = rounds;
        Ok(())
    }
}

pub fn handle_drill_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if session.phase == GamePhase::Evaluated {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuitConfirm;
            }
            KeyCode::Enter => {
                if let Some(summary) = session.advance() {
                    logger::log(&format!("game ended with score {}", summary.final_score));
                    *app_state = AppState::GameOver;
                }
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuitConfirm;
            }
            KeyCode::Enter => {
                let raw = session.input_buffer.clone();
                session.submit_answer(&raw);
            }
            KeyCode::Char('+') => {
                let _ = session.set_target_rounds(session.next_target_rounds + 1);
            }
            KeyCode::Char('-') => {
                let _ = session.set_target_rounds(session.next_target_rounds.saturating_sub(1));
            }
            KeyCode::Backspace => {
                session.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                session.input_buffer.push(c);
            }
            _ => {}
        }
    }
}
