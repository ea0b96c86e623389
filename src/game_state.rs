//! Game state management and turn control
//!
//! [`GameState`] owns the board and drives the turn cycle. Black is always
//! the human and White is always the AI. The AI plays on a later
//! [`GameState::tick`] once a short pacing delay has passed, so the human's
//! stone is rendered before the reply appears.

use crate::board::{pixel_to_coords, Board, Pos, Stone};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{check_win, find_winning_line, WIN_LENGTH};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default pause before the AI plays
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(300);

/// Runtime settings for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause between the human move and the AI reply
    pub ai_delay: Duration,
    /// Seed for the AI tie-break, `None` for entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay: DEFAULT_AI_DELAY,
            seed: None,
        }
    }
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
}

/// Turn phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForBlackInput,
    WaitingForWhiteMove,
    GameOver(GameResult),
}

/// Why a human move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,

    engine: AIEngine,
    config: GameConfig,
    /// When the pending AI move may be played
    ai_due: Option<Instant>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        log::info!("new game (ai delay {:?}, seed {:?})", config.ai_delay, config.seed);
        Self {
            board: Board::new(),
            phase: Phase::WaitingForBlackInput,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            engine,
            config,
            ai_due: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Color to move; the winner once the game is over
    pub fn current_player(&self) -> Stone {
        match self.phase {
            Phase::WaitingForBlackInput => Stone::Black,
            Phase::WaitingForWhiteMove => Stone::White,
            Phase::GameOver(result) => result.winner,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.phase == Phase::WaitingForBlackInput
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.phase == Phase::WaitingForWhiteMove
    }

    /// A new game may replace this one unless an AI move is pending
    pub fn can_start_new_game(&self) -> bool {
        !self.is_ai_turn()
    }

    pub fn game_over(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }

    /// Handle a click at pixel (x, y) relative to the board's top-left corner
    pub fn handle_mouse_click(&mut self, x: i32, y: i32) -> Result<(), MoveError> {
        let (row, col) = pixel_to_coords(x, y);
        self.try_place_stone(row, col)
    }

    /// Attempt to place the human's stone
    pub fn try_place_stone(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        match self.phase {
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::WaitingForWhiteMove => return Err(MoveError::NotYourTurn),
            Phase::WaitingForBlackInput => {}
        }

        let pos = Pos::checked(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { row, col });
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Advance the game clock. Plays the AI move once its delay has passed.
    pub fn tick(&mut self, now: Instant) -> Option<MoveResult> {
        match self.ai_due {
            Some(due) if self.is_ai_turn() && now >= due => self.play_ai_move(),
            _ => None,
        }
    }

    /// Time left before the AI may play
    pub fn ai_wait_remaining(&self, now: Instant) -> Option<Duration> {
        self.ai_due
            .filter(|_| self.is_ai_turn())
            .map(|due| due.saturating_duration_since(now))
    }

    /// Evaluate and play the AI move immediately.
    ///
    /// Returns `None` when it is not the AI's turn. When the board has no
    /// empty cell the result carries no move and the turn is not retried.
    pub fn play_ai_move(&mut self) -> Option<MoveResult> {
        if !self.is_ai_turn() {
            return None;
        }
        self.ai_due = None;

        let result = self.engine.get_move_with_stats(&self.board);
        match result.best_move {
            Some(pos) => {
                log::debug!(
                    "AI plays ({}, {}) score {} among {} candidates in {}ms",
                    pos.row,
                    pos.col,
                    result.score,
                    result.candidates,
                    result.time_ms
                );
                self.execute_move(pos);
            }
            None => log::warn!("AI has no empty cell to play"),
        }
        self.last_ai_result = Some(result.clone());
        Some(result)
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_player();

        self.board.place_stone(pos, color);
        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        log::debug!("{:?} at ({}, {}), move #{}", color, pos.row, pos.col, self.move_history.len());

        if check_win(&self.board, pos) {
            let result = GameResult {
                winner: color,
                winning_line: find_winning_line(&self.board, pos),
            };
            self.phase = Phase::GameOver(result);
            self.ai_due = None;
            announce_winner(color);
            return;
        }

        // Switch turn
        self.phase = match color.opponent() {
            Stone::White => {
                self.ai_due = Some(Instant::now() + self.config.ai_delay);
                Phase::WaitingForWhiteMove
            }
            _ => Phase::WaitingForBlackInput,
        };
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn announce_winner(winner: Stone) {
    log::info!("game over: {:?} wins", winner);
    println!("{} wins!", winner.player_label());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::pixel_to_cell;

    fn seeded(seed: u64) -> GameState {
        GameState::new(GameConfig {
            ai_delay: Duration::ZERO,
            seed: Some(seed),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = seeded(0);
        assert_eq!(state.phase, Phase::WaitingForBlackInput);
        assert_eq!(state.current_player(), Stone::Black);
        assert!(state.board.is_board_empty());
        assert!(state.game_over().is_none());
    }

    #[test]
    fn test_full_exchange_returns_to_black() {
        let mut state = seeded(1);
        state.try_place_stone(7, 7).unwrap();
        assert_eq!(state.phase, Phase::WaitingForWhiteMove);
        assert_eq!(state.current_player(), Stone::White);
        assert_eq!(state.board.stone_count(), 1);

        let result = state.play_ai_move().unwrap();
        let ai_pos = result.best_move.unwrap();
        assert_eq!(state.board.get(ai_pos), Stone::White);
        assert_eq!(state.current_player(), Stone::Black);
        assert_eq!(state.board.stone_count(), 2);
        assert_eq!(state.last_move, Some(ai_pos));
        assert_eq!(state.move_history.len(), 2);
    }

    #[test]
    fn test_invalid_clicks_are_no_ops() {
        let mut state = seeded(2);
        assert_eq!(state.try_place_stone(15, 0), Err(MoveError::OutOfBounds { row: 15, col: 0 }));
        assert_eq!(state.try_place_stone(0, -1), Err(MoveError::OutOfBounds { row: 0, col: -1 }));
        assert_eq!(state.phase, Phase::WaitingForBlackInput);

        state.try_place_stone(3, 3).unwrap();
        state.play_ai_move().unwrap();
        let before = state.board.clone();
        assert_eq!(state.try_place_stone(3, 3), Err(MoveError::Occupied { row: 3, col: 3 }));
        assert_eq!(state.board, before);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_click_during_ai_turn_rejected() {
        let mut state = seeded(3);
        state.try_place_stone(0, 0).unwrap();
        assert_eq!(state.try_place_stone(1, 1), Err(MoveError::NotYourTurn));
        assert_eq!(state.board.stone_count(), 1);
    }

    #[test]
    fn test_mouse_click_maps_pixels_to_cell() {
        let mut state = seeded(4);
        state.handle_mouse_click(85, 410).unwrap();
        assert_eq!(state.board.get(Pos::new(10, 2)), Stone::Black);

        state.play_ai_move();
        assert_eq!(
            state.handle_mouse_click(-5, 10),
            Err(MoveError::OutOfBounds { row: 0, col: -1 })
        );
        assert_eq!(
            state.handle_mouse_click(10, 600),
            Err(MoveError::OutOfBounds { row: 15, col: 0 })
        );
    }

    #[test]
    fn test_click_and_hover_map_to_same_cell() {
        for &(x, y) in &[(0, 0), (39, 40), (85, 410), (599, 599), (600, 5), (-1, 0), (300, -41)] {
            let mut state = seeded(11);
            match pixel_to_cell(x, y) {
                Some(pos) => {
                    state.handle_mouse_click(x, y).unwrap();
                    assert_eq!(state.board.get(pos), Stone::Black, "pixel ({}, {})", x, y);
                }
                None => assert!(matches!(
                    state.handle_mouse_click(x, y),
                    Err(MoveError::OutOfBounds { .. })
                )),
            }
        }
    }

    #[test]
    fn test_new_game_blocked_while_ai_pending() {
        let mut state = seeded(12);
        assert!(state.can_start_new_game());

        state.try_place_stone(7, 7).unwrap();
        assert!(!state.can_start_new_game());

        state.play_ai_move().unwrap();
        assert!(state.can_start_new_game());

        for c in 0..4 {
            state.board.place_stone(Pos::new(14, c), Stone::Black);
        }
        state.try_place_stone(14, 4).unwrap();
        assert!(state.game_over().is_some());
        assert!(state.can_start_new_game());
    }

    #[test]
    fn test_ai_reply_waits_after_human_stone() {
        let mut state = GameState::new(GameConfig {
            ai_delay: Duration::from_millis(300),
            seed: Some(13),
        });
        let clicked_at = Instant::now();
        state.handle_mouse_click(300, 300).unwrap();

        // A frame right after the click shows only the human stone
        assert!(state.tick(clicked_at).is_none());
        assert_eq!(state.board.stone_count(), 1);
        assert!(state.ai_wait_remaining(clicked_at).is_some());
    }

    #[test]
    fn test_ai_waits_for_delay() {
        let mut state = GameState::new(GameConfig {
            ai_delay: Duration::from_secs(60),
            seed: Some(5),
        });
        state.try_place_stone(7, 7).unwrap();

        let now = Instant::now();
        assert!(state.tick(now).is_none());
        assert!(state.ai_wait_remaining(now).unwrap() > Duration::from_secs(30));
        assert_eq!(state.board.stone_count(), 1);

        let later = now + Duration::from_secs(61);
        assert!(state.tick(later).is_some());
        assert_eq!(state.board.stone_count(), 2);
        assert!(state.ai_wait_remaining(later).is_none());
        assert!(state.tick(later).is_none());
    }

    #[test]
    fn test_tick_idle_on_human_turn() {
        let mut state = seeded(6);
        assert!(state.tick(Instant::now()).is_none());
        assert!(state.play_ai_move().is_none());
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut state = seeded(7);
        for c in 7..11 {
            state.board.place_stone(Pos::new(7, c), Stone::Black);
        }
        state.try_place_stone(7, 11).unwrap();

        let result = state.game_over().unwrap();
        assert_eq!(result.winner, Stone::Black);
        let line = result.winning_line.unwrap();
        assert_eq!(line[0], Pos::new(7, 7));
        assert_eq!(line[4], Pos::new(7, 11));

        assert_eq!(state.try_place_stone(0, 0), Err(MoveError::GameOver));
        assert!(state.tick(Instant::now() + Duration::from_secs(1)).is_none());
        assert!(state.play_ai_move().is_none());
        assert_eq!(state.board.stone_count(), 5);
    }

    #[test]
    fn test_ai_completes_five() {
        let mut state = seeded(8);
        for c in 0..4 {
            state.board.place_stone(Pos::new(0, c), Stone::White);
        }
        state.try_place_stone(14, 14).unwrap();
        let result = state.play_ai_move().unwrap();

        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(state.game_over().map(|r| r.winner), Some(Stone::White));
        assert_eq!(state.current_player(), Stone::White);
    }

    #[test]
    fn test_ai_blocks_open_four() {
        let mut state = seeded(9);
        for c in 3..6 {
            state.board.place_stone(Pos::new(5, c), Stone::Black);
        }
        state.board.place_stone(Pos::new(5, 2), Stone::White);
        state.try_place_stone(5, 6).unwrap();

        let result = state.play_ai_move().unwrap();
        assert_eq!(result.best_move, Some(Pos::new(5, 7)));
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let clicks = [(7, 7), (6, 6), (8, 9), (2, 12), (10, 3)];
        let mut a = seeded(42);
        let mut b = seeded(42);
        for &(r, c) in &clicks {
            for state in [&mut a, &mut b] {
                if state.try_place_stone(r, c).is_ok() {
                    state.play_ai_move();
                }
            }
        }
        assert_eq!(a.board, b.board);
        assert_eq!(a.move_history, b.move_history);
    }

    #[test]
    fn test_turns_alternate_for_many_exchanges() {
        let mut state = seeded(10);
        for _ in 0..20 {
            if state.game_over().is_some() {
                break;
            }
            let pos = state.board.empty_cells().next().unwrap();
            let stones = state.board.stone_count();
            state.try_place_stone(pos.row as i32, pos.col as i32).unwrap();
            if state.game_over().is_some() {
                assert_eq!(state.board.stone_count(), stones + 1);
                break;
            }
            state.play_ai_move().unwrap();
            if state.game_over().is_none() {
                assert!(state.is_human_turn());
                assert_eq!(state.board.stone_count(), stones + 2);
            }
        }

        // Colors strictly alternate starting with Black
        for (i, &(_, color)) in state.move_history.iter().enumerate() {
            let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(color, expected);
        }
    }
}
