//! Line-driven piskvork engine loop.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gomoku_core::{Board, Point, Side};
use gomoku_engine::{SearchConfig, Searcher};

use crate::command::{
    BoardEntry, Command, InfoSetting, format_point, parse_board_entry, parse_command,
};
use crate::error::ProtocolError;

/// The engine's own stones.
const OWN: Side = Side::First;
/// The manager's (opponent's) stones.
const THEIRS: Side = Side::Second;

/// The protocol engine, holding the game and the searcher.
///
/// Reads commands line by line and answers on the writer. Searches run on
/// the calling thread; the manager waits for the reply anyway.
pub struct GomokuEngine {
    searcher: Searcher,
    config: SearchConfig,
}

impl GomokuEngine {
    /// Create an engine on an empty board with the given search settings.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(Board::new(), config),
            config,
        }
    }

    /// Create an engine whose opening choices are reproducible.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            searcher: Searcher::new(Board::new(), config).with_seed(seed),
            config,
        }
    }

    /// The current game board.
    pub fn board(&self) -> &Board {
        self.searcher.board()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the protocol loop until `END` or end of input.
    ///
    /// Only I/O failures are returned; bad input is logged and answered
    /// with `ERROR`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<(), ProtocolError> {
        let mut lines = input.lines();

        while let Some(line) = lines.next() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let command = match parse_command(trimmed) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "protocol parse error");
                    writeln!(output, "ERROR {e}")?;
                    output.flush()?;
                    continue;
                }
            };

            match command {
                Command::Start(_) | Command::Restart => {
                    self.searcher.set_board(Board::new());
                    writeln!(output, "OK")?;
                }
                Command::Begin => self.reply_with_move(&mut output)?,
                Command::Turn(point) => {
                    if self.board().is_vacant(point) {
                        self.searcher.place(point, THEIRS);
                        self.reply_with_move(&mut output)?;
                    } else {
                        let e = ProtocolError::OccupiedCell {
                            point: format_point(point),
                        };
                        warn!(error = %e, "rejected move");
                        writeln!(output, "ERROR {e}")?;
                    }
                }
                Command::Board => {
                    let board = read_board(&mut lines, &mut output)?;
                    self.searcher.set_board(board);
                    self.reply_with_move(&mut output)?;
                }
                Command::Info(setting) => self.handle_info(setting, &mut output)?,
                Command::About => {
                    writeln!(
                        output,
                        "name=\"gomoku\", version=\"{}\"",
                        env!("CARGO_PKG_VERSION")
                    )?;
                }
                Command::End => break,
                Command::Unknown(name) => {
                    debug!(%name, "unknown command");
                    writeln!(output, "UNKNOWN {name}")?;
                }
            }
            output.flush()?;
        }

        info!("gomoku shutting down");
        Ok(())
    }

    fn handle_info<W: Write>(
        &mut self,
        setting: InfoSetting,
        output: &mut W,
    ) -> Result<(), ProtocolError> {
        let config = match setting {
            InfoSetting::TimeoutTurn(budget) => self.config.with_time_budget(budget),
            InfoSetting::MaxDepth(depth) => self.config.with_search_depth(depth),
            InfoSetting::MaxCombo(depth) => self.config.with_combo_depth(depth),
            InfoSetting::Other(key) => {
                debug!(%key, "ignoring setting");
                return Ok(());
            }
        };
        match config.validate() {
            Ok(()) => {
                debug!(?config, "search settings updated");
                self.config = config;
                self.searcher.set_config(config);
            }
            Err(e) => {
                let e = ProtocolError::from(e);
                warn!(error = %e, "rejected setting");
                writeln!(output, "ERROR {e}")?;
            }
        }
        Ok(())
    }

    /// Search for the engine's move, commit it and print it.
    fn reply_with_move<W: Write>(&mut self, output: &mut W) -> Result<(), ProtocolError> {
        let mut progress = Vec::new();
        let result = self.searcher.search_with(OWN, true, |depth, result| {
            if let Some((point, score)) = result.best() {
                debug!(depth, point = %format_point(point), %score, "iteration complete");
                progress.push(format!(
                    "DEBUG depth {depth} best {} score {score}",
                    format_point(point)
                ));
            }
        });
        for line in progress {
            writeln!(output, "{line}")?;
        }

        let counters = self.searcher.counters().snapshot();
        debug!(
            candidates = counters.all_candidates,
            finished = counters.finished_candidates,
            leaves = counters.evaluated_leaves,
            "search finished"
        );

        let chosen = match result {
            Some(result) => result.best_move().or_else(|| fallback_move(self.board())),
            None => {
                warn!("game is already decided");
                None
            }
        };
        match chosen {
            Some(point) => {
                self.searcher.place(point, OWN);
                writeln!(output, "{}", format_point(point))?;
            }
            None => writeln!(output, "ERROR no move available")?,
        }
        Ok(())
    }
}

/// The move played when no search depth completed in time.
fn fallback_move(board: &Board) -> Option<Point> {
    if board.is_full() {
        return None;
    }
    if let Some(&point) = board.neighbor_candidates().first() {
        return Some(point);
    }
    Some(Point::CENTER)
        .filter(|&center| board.is_vacant(center))
        .or_else(|| Point::all().find(|&p| board.is_vacant(p)))
}

/// Read `BOARD` entries up to `DONE` into a fresh board.
///
/// Bad entries are reported and skipped, as are stones on occupied cells.
fn read_board<I, W>(lines: &mut I, output: &mut W) -> Result<Board, ProtocolError>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    let mut board = Board::new();
    for line in lines {
        let line = line?;
        match parse_board_entry(&line) {
            Ok(BoardEntry::Done) => break,
            Ok(BoardEntry::Stone(point, side)) if board.is_vacant(point) => {
                board.place(point, side);
            }
            Ok(BoardEntry::Stone(point, _)) => {
                warn!(point = %format_point(point), "duplicate stone in board block");
            }
            Ok(BoardEntry::Marker(point)) => {
                debug!(point = %format_point(point), "skipping marker");
            }
            Err(e) => {
                warn!(error = %e, "bad board entry");
                writeln!(output, "ERROR {e}")?;
            }
        }
    }
    Ok(board)
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
