//! Core Connect Four game logic: board representation, counter types,
//! winning-line detection, and the turn state machine.

mod board;
mod counter;
mod direction;
mod engine;
mod win;

pub use board::{Board, Coord, EMPTY_CHAR};
pub use counter::Counter;
pub use direction::Direction;
pub use engine::{Game, GameOutcome};
pub use win::{winning_lines_through, WinningLine};
