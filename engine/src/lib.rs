//! Single-player tic-tac-toe engine: authoritative game state, human move
//! validation and a minimax-backed automated opponent.

pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{Difficulty, GameState, Outcome, Player, SessionHandle, TicTacToeSession};
