//! Piskvork command parsing.
//!
//! Coordinates on the wire are `x,y`, column first; the board's own
//! notation is row first.

use std::time::Duration;

use gomoku_core::{BOARD_SIZE, Point, Side};

use crate::error::ProtocolError;

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `START n` -- new game on an n×n board.
    Start(usize),
    /// `RESTART` -- new game on the current board size.
    Restart,
    /// `BEGIN` -- the engine plays the first move.
    Begin,
    /// `TURN x,y` -- the opponent played at the given cell.
    Turn(Point),
    /// `BOARD` -- a position follows, one entry per line, until `DONE`.
    Board,
    /// `INFO key value` -- a setting from the manager.
    Info(InfoSetting),
    /// `ABOUT` -- identify the engine.
    About,
    /// `END` -- exit.
    End,
    /// Unrecognized command.
    Unknown(String),
}

/// Settings delivered through `INFO`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoSetting {
    /// Time allowed for one move.
    TimeoutTurn(Duration),
    /// Maximum iterative-deepening depth.
    MaxDepth(u8),
    /// Maximum forced-win lookahead.
    MaxCombo(u8),
    /// A key the engine does not use.
    Other(String),
}

/// One line inside a `BOARD` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEntry {
    /// A stone; field 1 is the engine's own, field 2 the opponent's.
    Stone(Point, Side),
    /// Field 3, a continuous-game marker that is not a stone.
    Marker(Point),
    /// `DONE` -- the block is complete.
    Done,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first.to_ascii_uppercase().as_str() {
        "START" => parse_start(line, &tokens[1..]),
        "RESTART" => Ok(Command::Restart),
        "BEGIN" => Ok(Command::Begin),
        "TURN" => match tokens.get(1) {
            Some(text) => Ok(Command::Turn(parse_point(text)?)),
            None => Err(malformed(line)),
        },
        "BOARD" => Ok(Command::Board),
        "INFO" => parse_info(line, &tokens[1..]),
        "ABOUT" => Ok(Command::About),
        "END" => Ok(Command::End),
        _ => Ok(Command::Unknown((*first).to_string())),
    }
}

/// Parse a line inside a `BOARD` block.
pub fn parse_board_entry(line: &str) -> Result<BoardEntry, ProtocolError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("DONE") {
        return Ok(BoardEntry::Done);
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [x, y, field] = fields.as_slice() else {
        return Err(malformed(line));
    };
    let point = point_from_parts(x, y, line)?;
    match *field {
        "1" => Ok(BoardEntry::Stone(point, Side::First)),
        "2" => Ok(BoardEntry::Stone(point, Side::Second)),
        "3" => Ok(BoardEntry::Marker(point)),
        other => Err(ProtocolError::InvalidField {
            value: other.to_string(),
        }),
    }
}

/// Parse an `x,y` pair.
pub fn parse_point(text: &str) -> Result<Point, ProtocolError> {
    let Some((x, y)) = text.split_once(',') else {
        return Err(ProtocolError::InvalidCoordinates {
            text: text.to_string(),
        });
    };
    point_from_parts(x.trim(), y.trim(), text)
}

/// Render a point as `x,y`.
pub fn format_point(point: Point) -> String {
    format!("{},{}", point.col(), point.row())
}

fn point_from_parts(x: &str, y: &str, text: &str) -> Result<Point, ProtocolError> {
    let invalid = || ProtocolError::InvalidCoordinates {
        text: text.to_string(),
    };
    let col: usize = x.parse().map_err(|_| invalid())?;
    let row: usize = y.parse().map_err(|_| invalid())?;
    Point::new(row, col).ok_or_else(invalid)
}

fn parse_start(line: &str, tokens: &[&str]) -> Result<Command, ProtocolError> {
    let size: usize = tokens
        .first()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| malformed(line))?;
    if size != BOARD_SIZE {
        return Err(ProtocolError::UnsupportedSize { size });
    }
    Ok(Command::Start(size))
}

/// Parse `INFO key value`. Unknown keys are kept, not rejected.
fn parse_info(line: &str, tokens: &[&str]) -> Result<Command, ProtocolError> {
    let [key, value, ..] = tokens else {
        return Err(malformed(line));
    };
    let setting = match key.to_ascii_lowercase().as_str() {
        "timeout_turn" => {
            let ms: u64 = value.parse().map_err(|_| malformed(line))?;
            InfoSetting::TimeoutTurn(Duration::from_millis(ms))
        }
        "max_depth" => InfoSetting::MaxDepth(value.parse().map_err(|_| malformed(line))?),
        "max_combo" => InfoSetting::MaxCombo(value.parse().map_err(|_| malformed(line))?),
        _ => InfoSetting::Other((*key).to_string()),
    };
    Ok(Command::Info(setting))
}

fn malformed(line: &str) -> ProtocolError {
    ProtocolError::MalformedCommand {
        line: line.to_string(),
    }
}
