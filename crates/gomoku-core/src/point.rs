//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 15;

/// The four line directions (row delta, column delta): horizontal, vertical,
/// diagonal, anti-diagonal.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A cell on the board, addressed by row and column.
///
/// Index = row * 15 + col.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(u8);

impl Point {
    /// Total number of cells.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// The center cell (7, 7).
    pub const CENTER: Point = Point((BOARD_SIZE / 2 * BOARD_SIZE + BOARD_SIZE / 2) as u8);

    /// Create a point, returning `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Option<Point> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Point((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// Create a point from its index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Point> {
        if index < Self::COUNT {
            Some(Point(index as u8))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..225).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Step `steps` times along `(dr, dc)`, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32), steps: i32) -> Option<Point> {
        let row = self.row() as i32 + dr * steps;
        let col = self.col() as i32 + dc * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Point::new(row as usize, col as usize)
    }

    /// The up to eight cells touching this one.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        const AROUND: [(i32, i32); 8] =
            [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
        AROUND.into_iter().filter_map(move |dir| self.offset(dir, 1))
    }

    /// Iterate over all cells in index order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..Self::COUNT as u8).map(Point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({},{})", self.row(), self.col())
    }
}

/// Parses `row,col`.
impl FromStr for Point {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Point, BoardError> {
        let invalid = || BoardError::InvalidPoint {
            found: s.to_string(),
        };
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row: usize = row.trim().parse().map_err(|_| invalid())?;
        let col: usize = col.trim().parse().map_err(|_| invalid())?;
        Point::new(row, col).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::{BOARD_SIZE, Point};

    #[test]
    fn index_layout() {
        let p = Point::new(3, 4).unwrap();
        assert_eq!(p.index(), 3 * BOARD_SIZE + 4);
        assert_eq!((p.row(), p.col()), (3, 4));
        assert_eq!(Point::from_index(p.index()), Some(p));
        assert_eq!(Point::from_index(Point::COUNT), None);
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(Point::new(15, 0), None);
        assert_eq!(Point::new(0, 15), None);
    }

    #[test]
    fn center_is_seven_seven() {
        assert_eq!((Point::CENTER.row(), Point::CENTER.col()), (7, 7));
    }

    #[test]
    fn offset_stays_on_board() {
        let corner = Point::new(0, 0).unwrap();
        assert_eq!(corner.offset((1, 1), 2), Point::new(2, 2));
        assert_eq!(corner.offset((-1, 0), 1), None);
        assert_eq!(corner.offset((1, -1), 1), None);
    }

    #[test]
    fn corner_has_three_neighbors() {
        assert_eq!(Point::new(0, 0).unwrap().neighbors().count(), 3);
        assert_eq!(Point::CENTER.neighbors().count(), 8);
    }

    #[test]
    fn parse_and_display() {
        let p: Point = "4,11".parse().unwrap();
        assert_eq!(p, Point::new(4, 11).unwrap());
        assert_eq!(p.to_string(), "4,11");
        assert!("4".parse::<Point>().is_err());
        assert!("15,2".parse::<Point>().is_err());
        assert!("a,b".parse::<Point>().is_err());
    }
}
