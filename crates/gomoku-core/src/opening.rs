//! Opening heuristic for nearly empty boards.

use rand::Rng;
use tracing::trace;

use crate::board::Board;
use crate::point::Point;

/// Suggest an opening move without searching.
///
/// - Empty board: the center.
/// - Exactly one stone: a random empty cell touching it.
/// - Anything else: `None`, the position needs a real search.
pub fn opening_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Point> {
    match board.stone_count() {
        0 => Some(Point::CENTER),
        1 => {
            let stone = Point::all().find(|&p| !board.is_vacant(p))?;
            let around: Vec<Point> = stone.neighbors().filter(|&p| board.is_vacant(p)).collect();
            if around.is_empty() {
                return None;
            }
            let pick = around[rng.random_range(0..around.len())];
            trace!(%stone, %pick, "opening reply");
            Some(pick)
        }
        _ => None,
    }
}
