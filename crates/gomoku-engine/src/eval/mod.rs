//! Position evaluation.

mod pattern;

pub use pattern::PatternScore;

use gomoku_core::{Board, Point, Side};

/// Incrementally maintained heuristic accumulator.
///
/// Values are from the maximizing side's point of view: higher is better for
/// the side passed to [`init`](ScoreModel::init).
pub trait ScoreModel {
    /// Recompute from scratch for `board`, scoring for `maximizer`.
    fn init(&mut self, board: &Board, maximizer: Side);

    /// Account for `point` changing from `previous` to `new`.
    ///
    /// `board` may hold either value at `point`; implementations read the
    /// changed cell from the arguments, never from the board.
    fn on_move(&mut self, board: &Board, point: Point, new: Side, previous: Side);

    /// The current heuristic score.
    fn current(&self) -> i32;
}
