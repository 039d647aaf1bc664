//! Core Gomoku game logic: board representation, player types, and the
//! mutable game state machine with move-history undo.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Position, BOARD_SIZE, WIN_LENGTH};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError, UndoError};
