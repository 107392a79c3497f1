//! The gomoku board: cell contents, stone count, and Zobrist hash.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::point::{LINE_DIRECTIONS, Point};
use crate::side::Side;
use crate::zobrist;

/// A 15×15 grid of [`Side`]s.
///
/// Mutated in place with [`apply`](Board::apply) / [`undo`](Board::undo)
/// pairs during search; the hash and stone count are maintained
/// incrementally.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Side; Point::COUNT],
    /// Number of non-empty cells.
    stones: u16,
    /// Zobrist hash of the position.
    hash: u64,
}

/// Undo token returned by [`Board::apply`].
///
/// Must be handed back to [`Board::undo`] in last-in-first-out order.
#[must_use = "a placement must be undone"]
#[derive(Debug, PartialEq, Eq)]
pub struct Placement {
    point: Point,
    placed: Side,
    previous: Side,
}

impl Placement {
    /// The cell that was changed.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// What the cell holds after the placement.
    #[inline]
    pub fn placed(&self) -> Side {
        self.placed
    }

    /// What the cell held before the placement.
    #[inline]
    pub fn previous(&self) -> Side {
        self.previous
    }
}

/// Run of same-side stones through a cell along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Consecutive stones including the scanned cell.
    pub length: u32,
    /// Empty cells directly beyond each end of the run (0..=2).
    pub open_ends: u32,
}

impl LineShape {
    #[inline]
    pub fn is_five(self) -> bool {
        self.length >= 5
    }

    /// Four in a row with both ends empty: cannot be blocked.
    #[inline]
    pub fn is_open_four(self) -> bool {
        self.length == 4 && self.open_ends == 2
    }

    /// Four in a row with at least one end empty.
    #[inline]
    pub fn is_four(self) -> bool {
        self.length == 4 && self.open_ends >= 1
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board {
            cells: [Side::Empty; Point::COUNT],
            stones: 0,
            hash: 0,
        }
    }

    /// Return what occupies `point`.
    #[inline]
    pub fn get(&self, point: Point) -> Side {
        self.cells[point.index()]
    }

    /// Return `true` if `point` holds no stone.
    #[inline]
    pub fn is_vacant(&self, point: Point) -> bool {
        self.get(point) == Side::Empty
    }

    /// Number of stones on the board.
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones as usize
    }

    /// Return `true` if no stone has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    /// Return `true` if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == Point::COUNT
    }

    /// Return the Zobrist hash of the position.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Cells occupied by `side`, in index order.
    pub fn stones(&self, side: Side) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(move |&p| self.get(p) == side)
    }

    fn set(&mut self, point: Point, side: Side) -> Side {
        let previous = self.cells[point.index()];
        self.cells[point.index()] = side;
        self.hash ^= zobrist::key(point, previous) ^ zobrist::key(point, side);
        match (previous.is_stone(), side.is_stone()) {
            (false, true) => self.stones += 1,
            (true, false) => self.stones -= 1,
            _ => {}
        }
        previous
    }

    /// Permanently set `point` to `side` (a committed game move or setup).
    pub fn place(&mut self, point: Point, side: Side) {
        self.set(point, side);
    }

    /// Set `point` to `side` and return the token that reverts it.
    pub fn apply(&mut self, point: Point, side: Side) -> Placement {
        let previous = self.set(point, side);
        Placement {
            point,
            placed: side,
            previous,
        }
    }

    /// Revert a placement made by [`apply`](Board::apply).
    pub fn undo(&mut self, placement: Placement) {
        debug_assert_eq!(
            self.get(placement.point),
            placement.placed,
            "undo out of order at {}",
            placement.point
        );
        self.set(placement.point, placement.previous);
    }

    /// Apply a placement that is reverted when the returned guard drops.
    pub fn scoped(&mut self, point: Point, side: Side) -> ScopedPlacement<'_> {
        let placement = self.apply(point, side);
        ScopedPlacement {
            board: self,
            placement: Some(placement),
        }
    }

    /// Shape of the run `side` would have through `point` along `dir`,
    /// reading `point` itself as `side` whatever it currently holds.
    pub fn line_shape(&self, point: Point, side: Side, dir: (i32, i32)) -> LineShape {
        let mut length = 1;
        let mut open_ends = 0;
        for sign in [1, -1] {
            let step = (dir.0 * sign, dir.1 * sign);
            let mut cursor = point.offset(step, 1);
            while let Some(p) = cursor
                && self.get(p) == side
            {
                length += 1;
                cursor = p.offset(step, 1);
            }
            if cursor.is_some_and(|p| self.is_vacant(p)) {
                open_ends += 1;
            }
        }
        LineShape { length, open_ends }
    }

    /// Return `true` if `side` playing `point` completes five or more in a row.
    pub fn makes_five(&self, point: Point, side: Side) -> bool {
        LINE_DIRECTIONS
            .iter()
            .any(|&dir| self.line_shape(point, side, dir).is_five())
    }

    /// Return `true` if `side` already has five or more stones in a row.
    pub fn has_five_in_row(&self, side: Side) -> bool {
        self.stones(side).any(|p| {
            LINE_DIRECTIONS.iter().any(|&dir| {
                // Only count from the start of each run.
                let starts_run = p
                    .offset(dir, -1)
                    .is_none_or(|prev| self.get(prev) != side);
                starts_run && self.line_shape(p, side, dir).is_five()
            })
        })
    }

    /// The player with five in a row, if any.
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| self.has_five_in_row(side))
    }

    /// Empty cells touching at least one stone, in index order.
    pub fn neighbor_candidates(&self) -> Vec<Point> {
        Point::all()
            .filter(|&p| self.is_vacant(p) && p.neighbors().any(|n| !self.is_vacant(n)))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{self}\n)")
    }
}

/// Guard returned by [`Board::scoped`]; undoes its placement on drop.
pub struct ScopedPlacement<'a> {
    board: &'a mut Board,
    placement: Option<Placement>,
}

impl Deref for ScopedPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedPlacement<'_> {
    fn drop(&mut self) {
        if let Some(placement) = self.placement.take() {
            self.board.undo(placement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::point::Point;
    use crate::side::Side;
    use crate::zobrist;

    fn pt(row: usize, col: usize) -> Point {
        Point::new(row, col).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.winner(), None);
        assert!(board.neighbor_candidates().is_empty());
    }

    #[test]
    fn apply_undo_restores_everything() {
        let mut board = Board::new();
        board.place(Point::CENTER, Side::Second);
        let before = board;

        let a = board.apply(pt(3, 3), Side::First);
        let b = board.apply(pt(3, 4), Side::Second);
        assert_eq!(board.stone_count(), 3);
        assert_ne!(board.hash(), before.hash());
        board.undo(b);
        board.undo(a);

        assert_eq!(board, before);
    }

    #[test]
    fn hash_matches_scratch_after_moves() {
        let mut board = Board::new();
        board.place(pt(1, 1), Side::First);
        board.place(pt(2, 2), Side::Second);
        let token = board.apply(pt(5, 5), Side::First);
        assert_eq!(board.hash(), zobrist::hash_from_scratch(&board));
        board.undo(token);
        assert_eq!(board.hash(), zobrist::hash_from_scratch(&board));
    }

    #[test]
    fn scoped_placement_undoes_on_drop() {
        let mut board = Board::new();
        {
            let guard = board.scoped(Point::CENTER, Side::First);
            assert_eq!(guard.get(Point::CENTER), Side::First);
        }
        assert!(board.is_empty());
        assert_eq!(board.hash(), 0);
    }

    #[test]
    fn line_shape_counts_run_and_open_ends() {
        let mut board = Board::new();
        for col in 3..6 {
            board.place(pt(7, col), Side::First);
        }
        let shape = board.line_shape(pt(7, 6), Side::First, (0, 1));
        assert_eq!(shape.length, 4);
        assert_eq!(shape.open_ends, 2);
        assert!(shape.is_open_four());

        board.place(pt(7, 2), Side::Second);
        let shape = board.line_shape(pt(7, 6), Side::First, (0, 1));
        assert_eq!(shape.open_ends, 1);
        assert!(shape.is_four());
        assert!(!shape.is_open_four());
    }

    #[test]
    fn line_shape_blocked_by_edge() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(pt(0, col), Side::First);
        }
        let shape = board.line_shape(pt(0, 3), Side::First, (0, 1));
        assert_eq!(shape.length, 4);
        assert_eq!(shape.open_ends, 1);
    }

    #[test]
    fn makes_five_detects_gap_fill() {
        let mut board = Board::new();
        for col in [2, 3, 5, 6] {
            board.place(pt(4, col), Side::Second);
        }
        assert!(board.makes_five(pt(4, 4), Side::Second));
        assert!(!board.makes_five(pt(4, 4), Side::First));
        assert!(!board.makes_five(pt(4, 7), Side::Second));
    }

    #[test]
    fn five_in_row_on_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(pt(10 - i, 2 + i), Side::First);
        }
        assert!(board.has_five_in_row(Side::First));
        assert!(!board.has_five_in_row(Side::Second));
        assert_eq!(board.winner(), Some(Side::First));
    }

    #[test]
    fn four_is_not_a_win() {
        let mut board = Board::new();
        for row in 0..4 {
            board.place(pt(row, 14), Side::Second);
        }
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn neighbor_candidates_surround_stones() {
        let mut board = Board::new();
        board.place(Point::CENTER, Side::First);
        let candidates = board.neighbor_candidates();
        assert_eq!(candidates.len(), 8);
        assert!(candidates.iter().all(|p| board.is_vacant(*p)));

        board.place(pt(0, 0), Side::Second);
        assert_eq!(board.neighbor_candidates().len(), 11);
    }
}
