//! Five-cell window scoring.
//!
//! Every run of five consecutive cells along a line is a window. A window
//! holding stones of only one player is worth `WINDOW_VALUES[count]` to that
//! player; mixed windows are dead and worth nothing. The total is the
//! maximizer's windows minus the opponent's.

use gomoku_core::{Board, LINE_DIRECTIONS, Point, Side};

use super::ScoreModel;

/// Window value indexed by the number of stones in it.
const WINDOW_VALUES: [i32; 6] = [0, 1, 10, 100, 1_000, 100_000];

/// Cells per window.
const WINDOW: i32 = 5;

/// Window-sum score model, updated in O(20 windows) per move.
#[derive(Debug, Clone)]
pub struct PatternScore {
    maximizer: Side,
    total: i32,
}

impl PatternScore {
    pub fn new() -> Self {
        Self {
            maximizer: Side::First,
            total: 0,
        }
    }

    /// Score `board` from scratch for `maximizer`.
    pub fn from_board(board: &Board, maximizer: Side) -> Self {
        let mut model = Self::new();
        model.init(board, maximizer);
        model
    }

    fn window_value(
        &self,
        board: &Board,
        start: Point,
        dir: (i32, i32),
        overlay: Option<(Point, Side)>,
    ) -> i32 {
        let mut counts = [0usize; Side::PLAYERS];
        for step in 0..WINDOW {
            let Some(cell) = start.offset(dir, step) else {
                return 0;
            };
            let side = match overlay {
                Some((point, side)) if point == cell => side,
                _ => board.get(cell),
            };
            if side.is_stone() {
                counts[side.index()] += 1;
            }
        }

        let mine = counts[self.maximizer.index()];
        let theirs = counts[self.maximizer.opponent().index()];
        match (mine, theirs) {
            (0, 0) => 0,
            (n, 0) => WINDOW_VALUES[n],
            (0, n) => -WINDOW_VALUES[n],
            _ => 0,
        }
    }
}

impl Default for PatternScore {
    fn default() -> Self {
        Self::new()
    }
}

/// Start cells of every full window along `dir` that contains `point`.
fn windows_through(point: Point, dir: (i32, i32)) -> impl Iterator<Item = Point> {
    (0..WINDOW)
        .filter_map(move |back| point.offset(dir, -back))
        .filter(move |start| start.offset(dir, WINDOW - 1).is_some())
}

impl ScoreModel for PatternScore {
    fn init(&mut self, board: &Board, maximizer: Side) {
        debug_assert!(maximizer.is_stone(), "maximizer must be a player");
        self.maximizer = maximizer;
        self.total = 0;
        for start in Point::all() {
            for dir in LINE_DIRECTIONS {
                if start.offset(dir, WINDOW - 1).is_some() {
                    self.total += self.window_value(board, start, dir, None);
                }
            }
        }
    }

    fn on_move(&mut self, board: &Board, point: Point, new: Side, previous: Side) {
        let mut delta = 0;
        for dir in LINE_DIRECTIONS {
            for start in windows_through(point, dir) {
                delta += self.window_value(board, start, dir, Some((point, new)))
                    - self.window_value(board, start, dir, Some((point, previous)));
            }
        }
        self.total += delta;
    }

    fn current(&self) -> i32 {
        self.total
    }
}
