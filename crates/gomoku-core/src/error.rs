//! Error types for board text parsing and coordinates.

/// Errors from parsing a board or a point from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board text does not have exactly 15 non-empty rows.
    #[error("expected 15 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 15 cells.
    #[error("row {row} describes {length} cells, expected 15")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// A point string is malformed or off the board.
    #[error("invalid point: \"{found}\"")]
    InvalidPoint {
        /// The offending text.
        found: String,
    },
}
