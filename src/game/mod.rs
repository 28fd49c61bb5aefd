//! Core Connect Four game logic: board representation, gravity drops, win
//! detection and the turn-order state machine.

mod board;
pub mod moves;
mod side;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use moves::Placement;
pub use side::Side;
pub use state::{GameOutcome, GameState, Turn};
