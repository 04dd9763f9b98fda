mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, get_available_moves, is_valid_move};
pub use bot_controller::{
    MinimaxResult, calculate_minimax_move, calculate_random_move, minimax, select_move,
};
pub use game_state::GameState;
pub use session::{SessionHandle, TicTacToeSession};
pub use settings::TicTacToeSessionSettings;
pub use types::{Cell, Difficulty, Outcome, Player, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
