use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Outcome, Player};
use super::win_detector::evaluate;

/// Score and chosen cell of one minimax node. `index` is `None` at terminal
/// nodes, where there is no move left to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxResult {
    pub score: i32,
    pub index: Option<usize>,
}

impl MinimaxResult {
    fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

/// Picks the automated player's cell for the given difficulty.
///
/// The board must be in progress. Returns `None` when there is no move to make,
/// which the game state machine never lets happen.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut SessionRng) -> Option<usize> {
    debug_assert!(
        evaluate(board) == Outcome::InProgress,
        "bot asked to move on a finished board"
    );

    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                calculate_minimax_move(board)
            } else {
                calculate_random_move(board, rng)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Optimal move for `O`. The search always starts from `O` maximizing.
pub fn calculate_minimax_move(board: &Board) -> Option<usize> {
    minimax(board, Player::O, true).index
}

/// Exhaustive minimax scored from `O`'s side: +1 when `O` wins, -1 when `X`
/// wins, 0 for a draw.
///
/// Empty cells are tried in ascending order and a later move only replaces the
/// current best when strictly better, so the first of several equal moves wins.
pub fn minimax(board: &Board, player: Player, is_maximizing: bool) -> MinimaxResult {
    match evaluate(board) {
        Outcome::WinnerO => return MinimaxResult::terminal(1),
        Outcome::WinnerX => return MinimaxResult::terminal(-1),
        Outcome::Draw => return MinimaxResult::terminal(0),
        Outcome::InProgress => {}
    }

    let mut best: Option<MinimaxResult> = None;

    for index in get_available_moves(board) {
        let next = board.with_mark(index, player);
        let score = minimax(&next, player.opponent(), !is_maximizing).score;

        let improves = match best {
            None => true,
            Some(current) if is_maximizing => score > current.score,
            Some(current) => score < current.score,
        };

        if improves {
            best = Some(MinimaxResult {
                score,
                index: Some(index),
            });
        }
    }

    // InProgress guarantees at least one empty cell.
    best.unwrap_or(MinimaxResult::terminal(0))
}
