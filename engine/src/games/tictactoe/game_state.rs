use serde::{Deserialize, Serialize};

use super::board::{Board, is_valid_move};
use super::types::{Difficulty, Outcome, Player};
use super::win_detector::evaluate;

/// Snapshot of one game. Every transition returns a new value, so a snapshot
/// handed to a subscriber never changes underneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub outcome: Outcome,
    pub difficulty: Difficulty,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl GameState {
    pub const HUMAN: Player = Player::X;
    pub const BOT: Player = Player::O;

    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::empty(),
            current_player: Self::HUMAN,
            outcome: Outcome::InProgress,
            difficulty,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn needs_bot_move(&self) -> bool {
        self.outcome == Outcome::InProgress && self.current_player == Self::BOT
    }

    /// Places `X` at `index`. Returns `None`, leaving the game as it was, when
    /// the cell is taken or out of range, the game is over, or it is not the
    /// human's turn.
    pub fn apply_human_move(&self, index: usize) -> Option<GameState> {
        self.place_mark(Self::HUMAN, index)
    }

    /// Places `O` at `index`. The turn goes back to the human even when the
    /// move ends the game.
    pub fn apply_bot_move(&self, index: usize) -> Option<GameState> {
        self.place_mark(Self::BOT, index).map(|next| GameState {
            current_player: Self::HUMAN,
            ..next
        })
    }

    fn place_mark(&self, player: Player, index: usize) -> Option<GameState> {
        if self.is_over() || self.current_player != player || !is_valid_move(&self.board, index) {
            return None;
        }

        let board = self.board.with_mark(index, player);
        let outcome = evaluate(&board);
        let current_player = if outcome.is_terminal() {
            self.current_player
        } else {
            player.opponent()
        };

        Some(GameState {
            board,
            current_player,
            outcome,
            difficulty: self.difficulty,
        })
    }

    pub fn with_difficulty(&self, difficulty: Difficulty) -> GameState {
        GameState { difficulty, ..*self }
    }

    pub fn reset(&self) -> GameState {
        GameState::new(self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    fn state_with(cells: [Cell; 9], current_player: Player) -> GameState {
        let board = Board::from_cells(cells);
        GameState {
            board,
            current_player,
            outcome: evaluate(&board),
            difficulty: Difficulty::Hard,
        }
    }

    #[test]
    fn test_new_game_is_empty_and_x_to_move() {
        let state = GameState::new(Difficulty::Medium);

        assert_eq!(state.board, Board::empty());
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_center_move_hands_turn_to_bot() {
        let state = GameState::default().apply_human_move(4).unwrap();

        assert_eq!(state.board.get(4), Some(Cell::X));
        assert_eq!(state.current_player, Player::O);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert!(state.needs_bot_move());
    }

    #[test]
    fn test_completing_top_row_wins_immediately() {
        let state = state_with([X, X, E, O, O, E, E, E, E], Player::X);

        let next = state.apply_human_move(2).unwrap();

        assert_eq!(next.outcome, Outcome::WinnerX);
        assert!(!next.needs_bot_move());
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let state = GameState::default().apply_human_move(4).unwrap();
        let state = state.apply_bot_move(0).unwrap();

        assert_eq!(state.apply_human_move(4), None);
        assert_eq!(state.apply_human_move(0), None);
    }

    #[test]
    fn test_moves_after_game_over_are_noops() {
        let state = state_with([X, X, X, O, O, E, E, E, E], Player::X);

        assert!(state.is_over());
        assert_eq!(state.apply_human_move(5), None);
        assert_eq!(state.apply_bot_move(5), None);
    }

    #[test]
    fn test_human_cannot_move_on_bot_turn() {
        let state = GameState::default().apply_human_move(4).unwrap();

        assert_eq!(state.apply_human_move(0), None);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        assert_eq!(GameState::default().apply_human_move(9), None);
    }

    #[test]
    fn test_bot_move_returns_turn_to_human() {
        let state = GameState::default().apply_human_move(4).unwrap();
        let next = state.apply_bot_move(0).unwrap();

        assert_eq!(next.board.get(0), Some(Cell::O));
        assert_eq!(next.current_player, Player::X);
        assert_eq!(next.outcome, Outcome::InProgress);
        assert_eq!(next.board.count(Cell::O), 1);
    }

    #[test]
    fn test_bot_win_hands_turn_back_to_human() {
        let state = state_with([O, O, E, X, X, E, X, E, E], Player::O);

        let next = state.apply_bot_move(2).unwrap();

        assert_eq!(next.outcome, Outcome::WinnerO);
        assert_eq!(next.current_player, Player::X);
        assert!(!next.needs_bot_move());
    }

    #[test]
    fn test_filling_last_cell_without_line_is_draw() {
        let state = state_with([X, O, X, X, O, O, O, X, E], Player::X);

        let next = state.apply_human_move(8).unwrap();

        assert_eq!(next.outcome, Outcome::Draw);
    }

    #[test]
    fn test_difficulty_change_keeps_board_and_turn() {
        let state = GameState::default().apply_human_move(4).unwrap();
        let next = state.with_difficulty(Difficulty::Hard);

        assert_eq!(next.board, state.board);
        assert_eq!(next.current_player, state.current_player);
        assert_eq!(next.outcome, state.outcome);
        assert_eq!(next.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_reset_preserves_difficulty() {
        let state = state_with([X, X, X, O, O, E, E, E, E], Player::X);

        let next = state.reset();

        assert_eq!(next, GameState::new(Difficulty::Hard));
    }

    #[test]
    fn test_cells_never_revert_to_empty() {
        let mut state = GameState::new(Difficulty::Easy);
        let mut filled = Vec::new();

        for (human, bot) in [(0, 4), (8, 2), (6, 3)] {
            state = state.apply_human_move(human).unwrap();
            filled.push(human);
            if let Some(next) = state.apply_bot_move(bot) {
                state = next;
                filled.push(bot);
            }
            for &index in &filled {
                assert_ne!(state.board.get(index), Some(Cell::Empty));
            }
        }
    }
}
