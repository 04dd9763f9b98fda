use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Board, Difficulty, GameState, Player, minimax, select_move,
};

fn bench_minimax_after_first_move(c: &mut Criterion) {
    c.bench_function("minimax_after_corner_opening", |b| {
        let board = Board::empty().with_mark(0, Player::X);
        b.iter(|| minimax(black_box(&board), Player::O, true));
    });
}

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        let board = Board::empty();
        b.iter(|| minimax(black_box(&board), Player::O, true));
    });
}

fn bench_hard_full_game(c: &mut Criterion) {
    c.bench_function("hard_full_game_lowest_cell_human", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(0);
            let mut state = GameState::new(Difficulty::Hard);

            while !state.is_over() {
                let Some(human) = state.board.cells().iter().position(|cell| cell.is_empty()) else {
                    break;
                };
                let Some(next) = state.apply_human_move(human) else {
                    break;
                };
                state = next;

                if state.needs_bot_move() {
                    let Some(index) = select_move(&state.board, state.difficulty, &mut rng) else {
                        break;
                    };
                    let Some(next) = state.apply_bot_move(index) else {
                        break;
                    };
                    state = next;
                }
            }
            state
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_after_first_move,
    bench_minimax_empty_board,
    bench_hard_full_game
);
criterion_main!(benches);
