use super::board::Board;
use super::types::{Outcome, Player, WinningLine};

/// Rows, then columns, then diagonals. Scan order decides which line is
/// reported when an illegal board holds more than one.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::won_by(winner);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let player = cells[a].player()?;
        if cells[b] == cells[a] && cells[c] == cells[a] {
            Some(WinningLine::new(player, [a, b, c]))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::X;
    const O: Cell = Cell::O;

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [E; 9];
                for index in line {
                    cells[index] = player.mark();
                }
                let board = Board::from_cells(cells);

                assert_eq!(check_win(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_completed_line_wins_regardless_of_empty_cells() {
        let board = Board::from_cells([E, E, O, E, O, E, O, E, E]);

        assert_eq!(evaluate(&board), Outcome::WinnerO);
        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine::new(Player::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);

        assert_eq!(evaluate(&board), Outcome::WinnerX);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        assert_eq!(evaluate(&Board::empty()), Outcome::InProgress);

        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_illegal_board_reports_first_line_in_scan_order() {
        let board = Board::from_cells([O, O, O, X, X, X, E, E, E]);

        assert_eq!(evaluate(&board), Outcome::WinnerO);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_cells([X, X, O, E, E, E, E, E, E]);

        assert_eq!(check_win(&board), None);
    }
}
