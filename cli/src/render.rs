use tictactoe_engine::games::tictactoe::{
    BOARD_SIZE, Cell, GameState, Outcome, Player, WinningLine, check_win_with_line,
};

pub fn render_state(state: &GameState) -> String {
    let status = match state.outcome {
        Outcome::InProgress if state.current_player == Player::X => "Your move (X)".to_string(),
        Outcome::InProgress => "O is thinking...".to_string(),
        Outcome::Draw => "Draw. Type 'reset' to play again.".to_string(),
        Outcome::WinnerX | Outcome::WinnerO => {
            let line = check_win_with_line(&state.board)
                .map(|line| format!(" on cells {:?}", line.cells))
                .unwrap_or_default();
            format!("{}{}. Type 'reset' to play again.", state.outcome, line)
        }
    };

    let board = match check_win_with_line(&state.board) {
        Some(line) => render_board_with_line(state, &line),
        None => state.board.to_string(),
    };
    format!("\n{}[{}] {}", board, state.difficulty, status)
}

/// Same grid as the board's own `Display`, with the winning marks bracketed.
fn render_board_with_line(state: &GameState, line: &WinningLine) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let mark = match state.board.get(index) {
                        Some(Cell::X) => "X".to_string(),
                        Some(Cell::O) => "O".to_string(),
                        _ => index.to_string(),
                    };
                    if line.contains(index) {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    format!("{}\n", rows.join("\n---+---+---\n"))
}
