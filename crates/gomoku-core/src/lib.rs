//! Core gomoku types: points, sides, the board, and the opening heuristic.

mod board;
mod error;
mod opening;
mod point;
mod side;
mod text;
mod zobrist;

pub use board::{Board, LineShape, Placement, ScopedPlacement};
pub use error::BoardError;
pub use opening::opening_move;
pub use point::{BOARD_SIZE, LINE_DIRECTIONS, Point};
pub use side::Side;
