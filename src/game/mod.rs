//! Core English draughts logic: board representation, sides, coordinates,
//! and the rules state machine with in-place and immutable transitions.

mod board;
mod notation;
mod pos;
mod side;
mod state;

pub use board::{Board, BoardError, Square, COLS, ROWS};
pub use notation::Notation;
pub use pos::{Pos, Step};
pub use side::Side;
pub use state::{ActionError, GameOutcome, GameState, MoveError, MoveOutcome, DRAW};
