//! Piskvork protocol errors.

use gomoku_engine::ConfigError;

/// Errors that can occur during protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A known command with missing or unparsable arguments.
    #[error("malformed command: {line}")]
    MalformedCommand {
        /// The offending input line.
        line: String,
    },

    /// An `x,y` pair that is not a cell of the board.
    #[error("invalid coordinates: {text}")]
    InvalidCoordinates {
        /// The coordinate text as received.
        text: String,
    },

    /// `START` with a size other than 15.
    #[error("unsupported board size {size}")]
    UnsupportedSize {
        /// The requested size.
        size: usize,
    },

    /// A `BOARD` entry whose field is not 1, 2 or 3.
    #[error("invalid board field: {value}")]
    InvalidField {
        /// The field text as received.
        value: String,
    },

    /// A move onto a cell that already holds a stone.
    #[error("cell {point} is occupied")]
    OccupiedCell {
        /// The cell, in protocol `x,y` form.
        point: String,
    },

    /// An `INFO` value the search cannot run with.
    #[error("rejected setting: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error on the protocol streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
