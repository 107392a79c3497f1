//! Plain-text board format: 15 rows of 15 cells, `x` = First, `o` = Second,
//! `.` = empty. Whitespace inside a row is ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::BoardError;
use crate::point::{BOARD_SIZE, Point};
use crate::side::Side;

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Side::from_char(c).ok_or(BoardError::InvalidCellChar { character: c }))
                .collect::<Result<Vec<Side>, BoardError>>()?;
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::BadRowLength {
                    row,
                    length: cells.len(),
                });
            }
            for (col, side) in cells.into_iter().enumerate() {
                if let Some(point) = Point::new(row, col) {
                    board.place(point, side);
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let side = Point::new(row, col).map_or(Side::Empty, |p| self.get(p));
                write!(f, "{}", side.to_char())?;
            }
        }
        Ok(())
    }
}
